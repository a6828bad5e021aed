use std::time::Duration;

use crate::app::domain::{DisplayText, Level, TimerToken};

/// A side effect requested by the controller.
///
/// The controller decides, `AppState` performs. Keeping FLTK on the far side
/// of this enum is what lets every handler run in plain unit tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Redraw the display view with this text, styled from the current prefs.
    RenderDisplay(DisplayText),
    /// Overwrite the input box (after a paste or a clear).
    ReplaceSource(String),
    ReadClipboard,
    WriteClipboard(String),
    ShowToast { text: String, level: Level },
    HideToast,
    ArmDismissTimer { token: TimerToken, delay: Duration },
    CancelDismissTimer(TimerToken),
    ApplyTheme { dark: bool },
    OpenViewport,
    HideViewport,
    ShowAbout,
    Quit,
}
