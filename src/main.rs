use std::sync::Arc;

use fltk::app;

use better_lyrics::app::controllers::{Controller, DisplayPrefs};
use better_lyrics::app::domain::{AppSettings, Message, ThemeMode};
use better_lyrics::app::infrastructure::logging::init_logging;
use better_lyrics::app::infrastructure::platform::{Platform, detect_system_dark_mode};
use better_lyrics::app::services::clipboard::SystemClipboard;
use better_lyrics::app::state::AppState;
use better_lyrics::ui::main_window::build_main_window;
use better_lyrics::ui::menu::build_menu;

/// How often to poll for messages while no window is open (macOS only).
const IDLE_POLL_SECS: f64 = 0.25;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };
    let prefs = DisplayPrefs::from_settings(&settings, dark_mode);
    let platform = Platform::current();

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender, prefs);

    let controller = Controller::new(prefs, platform);
    let mut state = AppState::new(widgets, controller, sender, Arc::new(SystemClipboard::new()));
    state.start();
    log::info!(
        "Better Lyrics {} started ({:?}, dark mode: {})",
        env!("CARGO_PKG_VERSION"),
        platform,
        dark_mode
    );

    while !state.quit_requested() {
        if state.controller().viewport_open() {
            if !app.wait() {
                break;
            }
        } else if let Err(e) = app::wait_for(IDLE_POLL_SECS) {
            log::error!("Event loop failed: {}", e);
            break;
        }

        while let Some(msg) = receiver.recv() {
            state.dispatch(msg);
            if state.quit_requested() {
                break;
            }
        }
    }

    log::info!("Better Lyrics exiting");
}
