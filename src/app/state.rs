use std::sync::Arc;

use fltk::{
    app::{self, Sender, TimeoutHandle},
    prelude::*,
};

use super::controllers::{Controller, Effect};
use super::domain::{DisplayText, Level, Message, TimerToken};
use super::infrastructure::error::ClipboardError;
use super::services::clipboard::{self, ClipboardBackend};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::{MainWidgets, TOAST_HEIGHT};
use crate::ui::theme::{apply_theme, style_display, style_toast};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Main application coordinator.
///
/// Owns the widgets and the controller, feeds messages to the controller and
/// carries out the effects it returns against FLTK.
pub struct AppState {
    pub widgets: MainWidgets,
    controller: Controller,
    sender: Sender<Message>,
    clipboard: Arc<dyn ClipboardBackend>,
    dismiss_timer: Option<(TimerToken, TimeoutHandle)>,
    quit_requested: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        controller: Controller,
        sender: Sender<Message>,
        clipboard: Arc<dyn ClipboardBackend>,
    ) -> Self {
        Self {
            widgets,
            controller,
            sender,
            clipboard,
            dismiss_timer: None,
            quit_requested: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Open and paint the window for the first time.
    pub fn start(&mut self) {
        let effects = self.controller.startup();
        self.apply(effects);
    }

    pub fn dispatch(&mut self, msg: Message) {
        let effects = self.controller.handle(msg);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RenderDisplay(text) => self.render_display(&text),
                Effect::ReplaceSource(text) => self.widgets.input_buffer.set_text(&text),
                Effect::ReadClipboard => self.read_clipboard(),
                Effect::WriteClipboard(text) => self.write_clipboard(text),
                Effect::ShowToast { text, level } => self.show_toast(&text, level),
                Effect::HideToast => self.hide_toast(),
                Effect::ArmDismissTimer { token, delay } => {
                    let s = self.sender;
                    let handle = app::add_timeout3(delay.as_secs_f64(), move |_| {
                        s.send(Message::NotificationExpired(token));
                    });
                    self.dismiss_timer = Some((token, handle));
                }
                Effect::CancelDismissTimer(token) => self.cancel_timer(token),
                Effect::ApplyTheme { dark } => {
                    apply_theme(&mut self.widgets, dark);
                    #[cfg(target_os = "windows")]
                    if self.widgets.wind.shown() {
                        set_windows_titlebar_theme(&self.widgets.wind, dark);
                    }
                }
                Effect::OpenViewport => {
                    self.widgets.wind.show();
                    #[cfg(target_os = "windows")]
                    set_windows_titlebar_theme(&self.widgets.wind, self.controller.prefs().dark_mode);
                }
                Effect::HideViewport => self.widgets.wind.hide(),
                Effect::ShowAbout => show_about_dialog(),
                Effect::Quit => {
                    self.quit_requested = true;
                    app::quit();
                }
            }
        }
    }

    fn render_display(&mut self, text: &DisplayText) {
        style_display(&mut self.widgets.output, text.as_str(), text.style(), self.controller.prefs());
    }

    fn read_clipboard(&mut self) {
        let s = self.sender;
        let spawned = clipboard::spawn_read(self.clipboard.clone(), move |result| {
            s.send(Message::PasteFinished(result));
        });
        if let Err(e) = spawned {
            log::error!("Could not start clipboard reader: {}", e);
            self.dispatch(Message::PasteFinished(Err(ClipboardError::new(e.to_string()))));
        }
    }

    fn write_clipboard(&mut self, text: String) {
        let s = self.sender;
        let spawned = clipboard::spawn_write(self.clipboard.clone(), text, move |result| {
            s.send(Message::CopyFinished(result));
        });
        if let Err(e) = spawned {
            log::error!("Could not start clipboard writer: {}", e);
            self.dispatch(Message::CopyFinished(Err(ClipboardError::new(e.to_string()))));
        }
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        match self.dismiss_timer.take() {
            Some((armed, handle)) if armed == token => app::remove_timeout3(handle),
            other => self.dismiss_timer = other,
        }
    }

    fn show_toast(&mut self, text: &str, level: Level) {
        let toast = &mut self.widgets.toast;
        toast.set_label(text);
        style_toast(toast, level, self.controller.prefs().dark_mode);
        toast.show();
        self.widgets.flex.fixed(&self.widgets.toast, TOAST_HEIGHT);
        self.widgets.wind.redraw();
    }

    fn hide_toast(&mut self) {
        self.dismiss_timer = None;
        self.widgets.toast.hide();
        self.widgets.flex.fixed(&self.widgets.toast, 0);
        self.widgets.wind.redraw();
    }
}
