//! Transient status-bar notifications.

/// Ticks a toast stays visible (about 4 seconds at the default 250ms tick).
pub const TOAST_TICKS: usize = 16;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A notification shown in the status bar until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    ttl: usize,
}

impl Toast {
    /// Create a toast with the default lifetime.
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            ttl: TOAST_TICKS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    /// Count down one tick. Returns `true` once the toast has expired.
    pub fn tick(&mut self) -> bool {
        self.ttl = self.ttl.saturating_sub(1);
        self.ttl == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_ticks() {
        let mut toast = Toast::info("hello");
        for _ in 0..TOAST_TICKS - 1 {
            assert!(!toast.tick());
        }
        assert!(toast.tick());
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Toast::success("a").level, ToastLevel::Success);
        assert_eq!(Toast::warning("a").level, ToastLevel::Warning);
        assert_eq!(Toast::error("a").level, ToastLevel::Error);
    }
}
