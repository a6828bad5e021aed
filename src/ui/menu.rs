use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuFlag, SysMenuBar},
    prelude::*,
};

use crate::app::controllers::DisplayPrefs;
use crate::app::domain::{Message, TextAlignment};

fn toggle_flag(on: bool) -> MenuFlag {
    if on { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

fn radio_flag(selected: bool) -> MenuFlag {
    if selected { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio }
}

pub fn build_menu(menu: &mut SysMenuBar, sender: &Sender<Message>, prefs: DisplayPrefs) {
    let s = sender;

    // File
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Edit
    menu.add("Edit/Paste Lyrics", Shortcut::Ctrl | Shortcut::Shift | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PasteClicked) });
    menu.add("Edit/Copy Lyrics", Shortcut::Ctrl | Shortcut::Shift | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CopyClicked) });
    menu.add("Edit/Clear", Shortcut::Ctrl | Shortcut::Shift | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearInput) });

    // View
    menu.add("View/Toggle Dark Mode", Shortcut::None, toggle_flag(prefs.dark_mode), { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Bold Lyrics", Shortcut::None, toggle_flag(prefs.bold), { let s = *s; move |_| s.send(Message::ToggleBold) });
    menu.add("View/Larger Text", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::IncreaseFontSize) });
    menu.add("View/Smaller Text", Shortcut::Ctrl | '-', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DecreaseFontSize) });
    for (label, alignment, key) in [
        ("View/Align Left", TextAlignment::Left, 'l'),
        ("View/Align Center", TextAlignment::Center, 'e'),
        ("View/Align Right", TextAlignment::Right, 'r'),
    ] {
        menu.add(label, Shortcut::Ctrl | Shortcut::Shift | key, radio_flag(prefs.alignment == alignment), { let s = *s; move |_| s.send(Message::SetAlignment(alignment)) });
    }
    menu.add("View/Wider Line Spacing", Shortcut::Ctrl | ']', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::IncreaseLineSpacing) });
    menu.add("View/Tighter Line Spacing", Shortcut::Ctrl | '[', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DecreaseLineSpacing) });

    // Window
    menu.add("Window/Show Main Window", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Reactivate) });

    // Help
    menu.add("Help/About Better Lyrics", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
