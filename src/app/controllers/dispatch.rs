use crate::app::domain::notification::{
    COPY_FAILED, COPY_OK, DARK_MODE_ON, LIGHT_MODE_ON, NOTHING_TO_COPY, PASTE_FAILED, PASTE_OK,
};
use crate::app::domain::settings::{
    MAX_FONT_SIZE, MAX_LINE_SPACING_TENTHS, MIN_FONT_SIZE, MIN_LINE_SPACING_TENTHS,
};
use crate::app::domain::{AppSettings, DisplaySession, Message, Notice, TextAlignment};
use crate::app::infrastructure::error::ClipboardError;
use crate::app::infrastructure::platform::Platform;

use super::effects::Effect;
use super::notifications::NotificationController;

/// Step used by the Larger/Smaller Text menu items.
const FONT_STEP: u32 = 2;
/// Step used by the Wider/Tighter Line Spacing menu items, in tenths.
const LINE_SPACING_STEP: u32 = 2;

/// How the display view is styled. Lives only as long as the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub dark_mode: bool,
    pub font_size: u32,
    pub bold: bool,
    pub alignment: TextAlignment,
    /// Line height in tenths of the font size
    pub line_spacing_tenths: u32,
}

impl DisplayPrefs {
    pub fn from_settings(settings: &AppSettings, dark_mode: bool) -> Self {
        Self {
            dark_mode,
            font_size: settings.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            bold: settings.bold_display,
            alignment: settings.alignment,
            line_spacing_tenths: settings.line_spacing_tenths(),
        }
    }
}

/// The mirror-and-notify controller.
///
/// `handle` is the whole dispatch table: it takes one message, updates the
/// session, and returns the effects for the UI layer to carry out in order.
pub struct Controller {
    session: DisplaySession,
    notifications: NotificationController,
    prefs: DisplayPrefs,
    platform: Platform,
    viewport_open: bool,
}

impl Controller {
    pub fn new(prefs: DisplayPrefs, platform: Platform) -> Self {
        Self {
            session: DisplaySession::new(),
            notifications: NotificationController::new(),
            prefs,
            platform,
            viewport_open: false,
        }
    }

    pub fn session(&self) -> &DisplaySession {
        &self.session
    }

    pub fn notifications(&self) -> &NotificationController {
        &self.notifications
    }

    pub fn prefs(&self) -> DisplayPrefs {
        self.prefs
    }

    pub fn viewport_open(&self) -> bool {
        self.viewport_open
    }

    /// Effects for the first frame: open the window and paint it.
    pub fn startup(&mut self) -> Vec<Effect> {
        self.viewport_open = true;
        vec![
            Effect::OpenViewport,
            Effect::ApplyTheme {
                dark: self.prefs.dark_mode,
            },
            Effect::RenderDisplay(self.session.display().clone()),
        ]
    }

    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        match msg {
            Message::InputChanged(text) => self.input_changed(text),
            Message::PasteClicked => self.paste_clicked(),
            Message::PasteFinished(result) => self.paste_finished(result),
            Message::CopyClicked => self.copy_clicked(),
            Message::CopyFinished(result) => self.copy_finished(result),
            Message::ClearInput => self.replace_source(String::new()),
            Message::NotificationExpired(token) => self.notifications.expire(token),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ToggleBold => {
                self.prefs.bold = !self.prefs.bold;
                self.render()
            }
            Message::IncreaseFontSize => self.set_font_size(self.prefs.font_size + FONT_STEP),
            Message::DecreaseFontSize => {
                self.set_font_size(self.prefs.font_size.saturating_sub(FONT_STEP))
            }
            Message::SetAlignment(alignment) => {
                if alignment == self.prefs.alignment {
                    return Vec::new();
                }
                self.prefs.alignment = alignment;
                self.render()
            }
            Message::IncreaseLineSpacing => {
                self.set_line_spacing(self.prefs.line_spacing_tenths + LINE_SPACING_STEP)
            }
            Message::DecreaseLineSpacing => {
                self.set_line_spacing(self.prefs.line_spacing_tenths.saturating_sub(LINE_SPACING_STEP))
            }
            Message::WindowClose => self.window_closed(),
            Message::Reactivate => self.reactivate(),
            Message::ShowAbout => vec![Effect::ShowAbout],
            Message::Quit => vec![Effect::Quit],
        }
    }

    fn render(&self) -> Vec<Effect> {
        vec![Effect::RenderDisplay(self.session.display().clone())]
    }

    fn input_changed(&mut self, text: String) -> Vec<Effect> {
        // Replacing the input box echoes back as an InputChanged.
        if text == self.session.source_text() {
            return Vec::new();
        }
        self.session.set_source(text);
        self.render()
    }

    fn replace_source(&mut self, text: String) -> Vec<Effect> {
        self.session.set_source(text.clone());
        let mut effects = vec![Effect::ReplaceSource(text)];
        effects.extend(self.render());
        effects
    }

    fn paste_clicked(&mut self) -> Vec<Effect> {
        if self.session.paste_pending {
            log::debug!("paste already in flight, ignoring");
            return Vec::new();
        }
        self.session.paste_pending = true;
        vec![Effect::ReadClipboard]
    }

    fn paste_finished(&mut self, result: Result<String, ClipboardError>) -> Vec<Effect> {
        self.session.paste_pending = false;
        match result {
            Ok(text) => {
                // The input widget stores C strings and would cut the text at the first NUL.
                let text = if text.contains('\0') {
                    log::debug!("dropping NUL characters from pasted text");
                    text.replace('\0', "")
                } else {
                    text
                };
                let mut effects = self.replace_source(text);
                effects.extend(self.notifications.notify(Notice::success(PASTE_OK)));
                effects
            }
            Err(e) => {
                log::warn!("Failed to read from clipboard: {}", e);
                self.notifications.notify(Notice::failure(PASTE_FAILED))
            }
        }
    }

    fn copy_clicked(&mut self) -> Vec<Effect> {
        let display = self.session.display();
        if !display.is_copyable() {
            return self.notifications.notify(Notice::info(NOTHING_TO_COPY));
        }
        if self.session.copy_pending {
            log::debug!("copy already in flight, ignoring");
            return Vec::new();
        }
        let text = display.as_str().to_string();
        self.session.copy_pending = true;
        vec![Effect::WriteClipboard(text)]
    }

    fn copy_finished(&mut self, result: Result<(), ClipboardError>) -> Vec<Effect> {
        self.session.copy_pending = false;
        match result {
            Ok(()) => self.notifications.notify(Notice::success(COPY_OK)),
            Err(e) => {
                log::warn!("Failed to copy text: {}", e);
                self.notifications.notify(Notice::failure(COPY_FAILED))
            }
        }
    }

    fn toggle_dark_mode(&mut self) -> Vec<Effect> {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        let dark = self.prefs.dark_mode;
        let mut effects = vec![Effect::ApplyTheme { dark }];
        effects.extend(self.render());
        let text = if dark { DARK_MODE_ON } else { LIGHT_MODE_ON };
        effects.extend(self.notifications.notify(Notice::info(text)));
        effects
    }

    fn set_font_size(&mut self, size: u32) -> Vec<Effect> {
        let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if size == self.prefs.font_size {
            return Vec::new();
        }
        self.prefs.font_size = size;
        self.render()
    }

    fn set_line_spacing(&mut self, tenths: u32) -> Vec<Effect> {
        let tenths = tenths.clamp(MIN_LINE_SPACING_TENTHS, MAX_LINE_SPACING_TENTHS);
        if tenths == self.prefs.line_spacing_tenths {
            return Vec::new();
        }
        self.prefs.line_spacing_tenths = tenths;
        self.render()
    }

    fn window_closed(&mut self) -> Vec<Effect> {
        self.viewport_open = false;
        if self.platform.quits_on_last_window_closed() {
            vec![Effect::Quit]
        } else {
            log::info!("last window closed, staying alive until reactivated");
            vec![Effect::HideViewport]
        }
    }

    fn reactivate(&mut self) -> Vec<Effect> {
        if self.viewport_open {
            return Vec::new();
        }
        self.startup()
    }
}
