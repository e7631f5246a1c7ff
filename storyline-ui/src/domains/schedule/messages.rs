use super::validation::ScheduledRelease;

#[derive(Clone, PartialEq, Eq)]
pub enum ScheduleMessage {
    Open,
    SelectDate(String),
    SelectTime(String),
    Confirm,
    Close,
    /// Caller-owned in-flight flag for the scheduling request
    SetLoading(bool),
}

impl ScheduleMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Schedule::Open",
            Self::SelectDate(_) => "Schedule::SelectDate",
            Self::SelectTime(_) => "Schedule::SelectTime",
            Self::Confirm => "Schedule::Confirm",
            Self::Close => "Schedule::Close",
            Self::SetLoading(_) => "Schedule::SetLoading",
        }
    }
}

impl std::fmt::Debug for ScheduleMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectDate(value) => {
                write!(f, "Schedule::SelectDate({value:?})")
            }
            Self::SelectTime(value) => {
                write!(f, "Schedule::SelectTime({value:?})")
            }
            Self::SetLoading(loading) => {
                write!(f, "Schedule::SetLoading({loading})")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Events the embedding application reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleEvent {
    /// A confirmed, strictly-future release time. Emitted exactly once per
    /// accepted confirmation.
    Scheduled(ScheduledRelease),
    /// The modal was reset and should be dismissed
    CloseRequested,
}
