use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::SysMenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::lyrics_view::LyricsView;
use crate::app::domain::{AppSettings, Message};
use crate::app::infrastructure::buffer::read_buffer_text;

/// Height of the toast row while a notification is showing.
pub const TOAST_HEIGHT: i32 = 40;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: SysMenuBar,
    pub title: Frame,
    pub subtitle: Frame,
    pub paste_button: Button,
    pub copy_button: Button,
    pub input: TextEditor,
    pub input_buffer: TextBuffer,
    pub output: LyricsView,
    pub toast: Frame,
}

/// Build the single window and wire its widgets to `sender`.
///
/// The window is not shown here; the controller's startup effects do that.
pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, "Better Lyrics");
    wind.set_xclass("BetterLyrics");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(FlexType::Column);

    let menu = SysMenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut title = Frame::default().with_label("Better Lyrics");
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(32);
    flex.fixed(&title, 60);

    let mut subtitle = Frame::default().with_label("Paste your lyrics below to make them look great.");
    subtitle.set_label_size(16);
    flex.fixed(&subtitle, 30);

    let mut button_row = Flex::default();
    button_row.set_type(FlexType::Row);
    button_row.set_spacing(10);
    let mut paste_button = Button::default().with_label("Paste from Clipboard");
    let mut copy_button = Button::default().with_label("Copy Lyrics");
    button_row.end();
    flex.fixed(&button_row, 44);

    paste_button.emit(*sender, Message::PasteClicked);
    copy_button.emit(*sender, Message::CopyClicked);

    let mut input_buffer = TextBuffer::default();
    let mut input = TextEditor::new(0, 0, 0, 0, "");
    input.set_buffer(input_buffer.clone());
    input.wrap_mode(WrapMode::AtBounds, 0);
    flex.fixed(&input, 200);

    // Every edit, typed or programmatic, becomes an InputChanged.
    let reader = input_buffer.clone();
    let s = *sender;
    input_buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
        if inserted > 0 || deleted > 0 {
            s.send(Message::InputChanged(read_buffer_text(&reader)));
        }
    });

    let output = LyricsView::new();

    // Toast row, collapsed until a notification is shown
    let mut toast = Frame::default().with_size(0, 0);
    toast.set_frame(FrameType::FlatBox);
    toast.set_label_size(15);
    toast.hide();
    flex.fixed(&toast, 0);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the close button through the controller instead of hiding directly
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        title,
        subtitle,
        paste_button,
        copy_button,
        input,
        input_buffer,
        output,
        toast,
    }
}
