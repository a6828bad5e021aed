use std::time::Duration;

/// How long an ordinary notification stays on screen.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Failures stay up longer so the instructions can be read.
pub const EXTENDED_DELAY: Duration = Duration::from_millis(5000);

pub const PASTE_OK: &str = "Lyrics pasted successfully!";
pub const PASTE_FAILED: &str =
    "Could not paste lyrics. Please click on the text area and press Ctrl+V or Cmd+V.";
pub const COPY_OK: &str = "Lyrics copied to clipboard!";
pub const COPY_FAILED: &str =
    "Could not copy lyrics. Please select the text and press Ctrl+C or Cmd+C.";
pub const NOTHING_TO_COPY: &str = "There are no lyrics to copy.";
pub const DARK_MODE_ON: &str = "Switched to Dark Mode";
pub const LIGHT_MODE_ON: &str = "Switched to Light Mode";

/// Identifies one armed dismissal timer.
///
/// Every notification gets a fresh token, so an expiry that arrives for an
/// older notification can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Severity of a notification. Only affects toast colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Success,
    Error,
}

/// A request to show one toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: Level,
    pub delay: Duration,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Info,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Success,
            delay: DEFAULT_DELAY,
        }
    }

    /// Failure notices always use the extended delay.
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Error,
            delay: EXTENDED_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays() {
        assert_eq!(Notice::info(NOTHING_TO_COPY).delay, Duration::from_millis(3000));
        assert_eq!(Notice::success(PASTE_OK).delay, Duration::from_millis(3000));
        assert_eq!(Notice::failure(PASTE_FAILED).delay, Duration::from_millis(5000));
    }

    #[test]
    fn test_failure_texts_suggest_shortcuts() {
        assert!(PASTE_FAILED.contains("Ctrl+V"));
        assert!(COPY_FAILED.contains("Ctrl+C"));
    }
}
