/// Text shown in the display view while there is nothing to show.
pub const PLACEHOLDER: &str = "Your beautiful lyrics will be displayed here.";

/// How the display view should style its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Large, emphasized lyrics.
    Emphasized,
    /// Small, muted placeholder.
    Muted,
}

/// The display-ready form of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayText {
    Lyrics(String),
    #[default]
    Placeholder,
}

impl DisplayText {
    /// The exact text the display view shows.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lyrics(text) => text,
            Self::Placeholder => PLACEHOLDER,
        }
    }

    pub fn style(&self) -> DisplayStyle {
        match self {
            Self::Lyrics(_) => DisplayStyle::Emphasized,
            Self::Placeholder => DisplayStyle::Muted,
        }
    }

    /// Whether the shown text is worth putting on the clipboard.
    ///
    /// Lyrics that happen to read exactly like the placeholder count as
    /// nothing, same as the placeholder itself.
    pub fn is_copyable(&self) -> bool {
        let shown = self.as_str();
        !shown.is_empty() && shown != PLACEHOLDER
    }
}

/// Derive the display text from raw source text.
pub fn mirror(source: &str) -> DisplayText {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        DisplayText::Placeholder
    } else {
        DisplayText::Lyrics(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "\n\t  \r\n",
        "hello",
        "  hello world  ",
        "\n\nVerse one\n  indented line\n\nChorus\n\n",
        "\u{3000}全角\u{3000}",
        "\u{a0}nbsp\u{a0}",
        PLACEHOLDER,
    ];

    #[test]
    fn test_placeholder_iff_blank() {
        for s in SAMPLES {
            let shown = mirror(s);
            assert_eq!(shown == DisplayText::Placeholder, s.trim().is_empty(), "input {:?}", s);
        }
    }

    #[test]
    fn test_lyrics_are_trimmed_verbatim() {
        for s in SAMPLES.iter().filter(|s| !s.trim().is_empty()) {
            assert_eq!(mirror(s).as_str(), s.trim());
        }
    }

    #[test]
    fn test_mirror_is_idempotent_under_trim() {
        for s in SAMPLES {
            assert_eq!(mirror(s.trim()), mirror(s));
        }
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let shown = mirror("  line one\n\n   line two  \n");
        assert_eq!(shown.as_str(), "line one\n\n   line two");
    }

    #[test]
    fn test_styles() {
        assert_eq!(mirror("la la").style(), DisplayStyle::Emphasized);
        assert_eq!(mirror("   ").style(), DisplayStyle::Muted);
        assert_eq!(DisplayText::default(), DisplayText::Placeholder);
    }

    #[test]
    fn test_copyable() {
        assert!(mirror("Hello").is_copyable());
        assert!(!mirror("").is_copyable());
        assert!(!DisplayText::Placeholder.is_copyable());
        // typed text identical to the placeholder is still "nothing"
        assert!(!mirror(PLACEHOLDER).is_copyable());
    }
}
