use fltk::{
    enums::{Color, Font},
    frame::Frame,
    prelude::*,
};

use super::lyrics_view::{LyricsLook, LyricsView};
use super::main_window::MainWidgets;
use crate::app::controllers::DisplayPrefs;
use crate::app::domain::{DisplayStyle, Level};

/// Size of the muted placeholder text, independent of the lyrics size.
const PLACEHOLDER_FONT_SIZE: i32 = 16;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub selection: Color,
    pub paste_button: Color,
    pub copy_button: Color,
    pub toast_info: Color,
    pub toast_success: Color,
    pub toast_error: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            background: Color::from_rgb(25, 25, 25),
            surface: Color::from_rgb(51, 51, 51),
            text: Color::from_rgb(240, 240, 240),
            muted: Color::from_rgb(140, 140, 140),
            selection: Color::from_rgb(70, 70, 100),
            paste_button: Color::from_rgb(51, 102, 51),
            copy_button: Color::from_rgb(102, 51, 51),
            toast_info: Color::from_rgb(60, 60, 70),
            toast_success: Color::from_rgb(34, 110, 60),
            toast_error: Color::from_rgb(150, 40, 40),
        }
    } else {
        Palette {
            background: Color::from_rgb(242, 242, 242),
            surface: Color::White,
            text: Color::Black,
            muted: Color::from_rgb(107, 114, 128),
            selection: Color::from_rgb(173, 216, 230),
            paste_button: Color::from_rgb(80, 150, 80),
            copy_button: Color::from_rgb(170, 80, 80),
            toast_info: Color::from_rgb(55, 65, 81),
            toast_success: Color::from_rgb(22, 163, 74),
            toast_error: Color::from_rgb(220, 38, 38),
        }
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let p = palette(is_dark);

    widgets.wind.set_color(p.background);
    widgets.flex.set_color(p.background);
    widgets.menu.set_color(p.surface);
    widgets.menu.set_text_color(p.text);
    widgets.menu.set_selection_color(p.selection);

    widgets.title.set_label_color(p.text);
    widgets.subtitle.set_label_color(p.muted);

    for (button, color) in [
        (&mut widgets.paste_button, p.paste_button),
        (&mut widgets.copy_button, p.copy_button),
    ] {
        button.set_color(color);
        button.set_label_color(Color::White);
    }

    widgets.input.set_color(p.surface);
    widgets.input.set_text_color(p.text);
    widgets.input.set_cursor_color(p.text);
    widgets.input.set_selection_color(p.selection);

    widgets.output.set_background(p.surface);

    widgets.wind.redraw();
}

/// How the display view paints lyrics or the placeholder under `prefs`.
pub fn display_look(style: DisplayStyle, prefs: DisplayPrefs) -> LyricsLook {
    let p = palette(prefs.dark_mode);
    let (font, size, color) = match style {
        DisplayStyle::Emphasized => {
            let font = if prefs.bold { Font::HelveticaBold } else { Font::Helvetica };
            (font, prefs.font_size as i32, p.text)
        }
        DisplayStyle::Muted => (Font::Helvetica, PLACEHOLDER_FONT_SIZE, p.muted),
    };
    LyricsLook {
        font,
        size,
        color,
        background: p.surface,
        alignment: prefs.alignment,
        line_spacing_tenths: prefs.line_spacing_tenths,
    }
}

pub fn style_display(display: &mut LyricsView, text: &str, style: DisplayStyle, prefs: DisplayPrefs) {
    display.set_content(text, display_look(style, prefs));
}

pub fn style_toast(toast: &mut Frame, level: Level, is_dark: bool) {
    let p = palette(is_dark);
    let color = match level {
        Level::Info => p.toast_info,
        Level::Success => p.toast_success,
        Level::Error => p.toast_error,
    };
    toast.set_color(color);
    toast.set_label_color(Color::White);
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // 20 on Windows 11 / Windows 10 2004+, 19 on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
