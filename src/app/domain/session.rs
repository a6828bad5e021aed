use super::mirror::{DisplayText, mirror};

/// The in-memory state of one running instance.
///
/// `display` is only ever written through [`DisplaySession::set_source`], so
/// it can never drift from `source_text`.
#[derive(Debug, Default)]
pub struct DisplaySession {
    source_text: String,
    display: DisplayText,
    /// A clipboard read is in flight.
    pub paste_pending: bool,
    /// A clipboard write is in flight.
    pub copy_pending: bool,
}

impl DisplaySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn display(&self) -> &DisplayText {
        &self.display
    }

    /// Replace the source text and recompute the display text.
    pub fn set_source(&mut self, text: impl Into<String>) -> &DisplayText {
        self.source_text = text.into();
        self.display = mirror(&self.source_text);
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::mirror::PLACEHOLDER;

    #[test]
    fn test_initial_state() {
        let session = DisplaySession::new();
        assert_eq!(session.source_text(), "");
        assert_eq!(session.display().as_str(), PLACEHOLDER);
        assert!(!session.paste_pending);
        assert!(!session.copy_pending);
    }

    #[test]
    fn test_display_follows_source() {
        let mut session = DisplaySession::new();
        session.set_source("  hello world  ");
        assert_eq!(session.source_text(), "  hello world  ");
        assert_eq!(session.display().as_str(), "hello world");

        session.set_source("");
        assert_eq!(session.display(), &DisplayText::Placeholder);
    }
}
