/// Chapter count of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ChapterCount(u32);

impl ChapterCount {
    pub fn new(count: u32) -> Self {
        ChapterCount(count)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Stat line text, e.g. `"41 chapters"`
    pub fn label(&self) -> String {
        format!("{} chapters", self.0)
    }
}

impl std::fmt::Display for ChapterCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChapterCount {
    fn from(count: u32) -> Self {
        ChapterCount(count)
    }
}

/// Format a vote or view count for compact display.
///
/// Values of a million or more render as `"2.5M"`, values of a thousand or
/// more as `"1.5k"`, anything smaller as the plain integer. The single
/// decimal is rounded half-up on the exact decimal value.
pub fn format_compact_count(value: u64) -> String {
    const MILLION: u64 = 1_000_000;
    const THOUSAND: u64 = 1_000;

    if value >= MILLION {
        format!("{}M", one_decimal(value, MILLION))
    } else if value >= THOUSAND {
        format!("{}k", one_decimal(value, THOUSAND))
    } else {
        value.to_string()
    }
}

fn one_decimal(value: u64, unit: u64) -> String {
    // Work in tenths of `unit` with integer math so the output is exact.
    let tenths = (u128::from(value) * 10 + u128::from(unit) / 2)
        / u128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_plain() {
        assert_eq!(format_compact_count(0), "0");
        assert_eq!(format_compact_count(999), "999");
    }

    #[test]
    fn thousands_use_k_suffix() {
        assert_eq!(format_compact_count(1_000), "1.0k");
        assert_eq!(format_compact_count(1_500), "1.5k");
        assert_eq!(format_compact_count(1_250), "1.3k");
        assert_eq!(format_compact_count(12_340), "12.3k");
        assert_eq!(format_compact_count(999_999), "1000.0k");
    }

    #[test]
    fn millions_use_m_suffix() {
        assert_eq!(format_compact_count(1_000_000), "1.0M");
        assert_eq!(format_compact_count(2_500_000), "2.5M");
        assert_eq!(format_compact_count(u64::MAX), "18446744073709.6M");
    }

    #[test]
    fn chapter_label_pluralizes_uniformly() {
        assert_eq!(ChapterCount::new(41).label(), "41 chapters");
    }
}
