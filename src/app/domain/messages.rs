use super::notification::TimerToken;
use super::settings::TextAlignment;
use crate::app::infrastructure::error::ClipboardError;

/// Everything the controller reacts to.
///
/// Widget callbacks, clipboard workers and timers all send one of these
/// through the FLTK channel; the dispatch loop in main hands each to
/// `Controller::handle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Page
    InputChanged(String),
    PasteClicked,
    CopyClicked,
    ClearInput,

    // Async completions
    PasteFinished(Result<String, ClipboardError>),
    CopyFinished(Result<(), ClipboardError>),
    NotificationExpired(TimerToken),

    // View
    ToggleDarkMode,
    ToggleBold,
    IncreaseFontSize,
    DecreaseFontSize,
    SetAlignment(TextAlignment),
    IncreaseLineSpacing,
    DecreaseLineSpacing,

    // Shell
    WindowClose,
    Reactivate,
    Quit,
    ShowAbout,
}
