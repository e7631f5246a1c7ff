//! Transient user feedback (toasts)
//!
//! Domains never talk to a toast system directly. They receive a
//! [`Notifier`] and hand it [`ToastNotification`]s, so tests can substitute
//! a recording stub.

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotification {
    pub level: ToastLevel,
    pub message: String,
}

impl ToastNotification {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}

/// Capability for surfacing toasts to the user
pub trait Notifier: Send + Sync + Debug {
    fn notify(&self, toast: ToastNotification);
}

/// Notifier that only writes toasts to the log.
///
/// Used when no view layer is attached (headless runs, diagnostics).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: ToastNotification) {
        match toast.level {
            ToastLevel::Error => log::error!("[Toast] {}", toast.message),
            ToastLevel::Warning => log::warn!("[Toast] {}", toast.message),
            ToastLevel::Info | ToastLevel::Success => {
                log::info!("[Toast] {}", toast.message)
            }
        }
    }
}
