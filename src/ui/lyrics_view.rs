use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    draw,
    enums::{Color, Font, FrameType},
    group::{Scroll, ScrollType},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::TextAlignment;

/// Space between the view's edge and the text.
const PADDING: i32 = 20;
/// Room left for the vertical scrollbar.
const SCROLLBAR_WIDTH: i32 = 16;

/// How the lyrics are painted.
#[derive(Debug, Clone, Copy)]
pub struct LyricsLook {
    pub font: Font,
    pub size: i32,
    pub color: Color,
    pub background: Color,
    pub alignment: TextAlignment,
    pub line_spacing_tenths: u32,
}

impl Default for LyricsLook {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            size: 16,
            color: Color::Black,
            background: Color::White,
            alignment: TextAlignment::Center,
            line_spacing_tenths: 12,
        }
    }
}

#[derive(Default)]
struct LyricsViewState {
    lines: Vec<String>,
    look: LyricsLook,
}

/// Read-only, scrollable display of the mirrored lyrics.
///
/// Lines are drawn one by one so each can be aligned on its own and spaced
/// by a multiple of the font size, which `TextDisplay` cannot do.
pub struct LyricsView {
    pub scroll: Scroll,
    canvas: Widget,
    state: Rc<RefCell<LyricsViewState>>,
}

impl LyricsView {
    pub fn new() -> Self {
        let mut scroll = Scroll::new(0, 0, 0, 0, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);
        let mut canvas = Widget::new(0, 0, 0, 0, None);
        scroll.end();

        let state = Rc::new(RefCell::new(LyricsViewState::default()));

        let draw_state = state.clone();
        canvas.draw(move |wid| {
            let st = draw_state.borrow();
            draw_lyrics(wid, &st);
        });

        let mut fit_canvas = canvas.clone();
        let fit_state = state.clone();
        scroll.resize_callback(move |s, x, y, w, h| {
            let st = fit_state.borrow();
            let height = content_height(st.lines.len(), &st.look).max(h);
            fit_canvas.resize(x, y - s.yposition(), w - SCROLLBAR_WIDTH, height);
        });

        Self {
            scroll,
            canvas,
            state,
        }
    }

    /// Replace the shown text and how it looks, then repaint.
    pub fn set_content(&mut self, text: &str, look: LyricsLook) {
        {
            let mut st = self.state.borrow_mut();
            st.lines = text.lines().map(str::to_string).collect();
            st.look = look;
        }
        self.scroll.set_color(look.background);
        self.fit_canvas();
        self.scroll.redraw();
    }

    pub fn set_background(&mut self, color: Color) {
        self.state.borrow_mut().look.background = color;
        self.scroll.set_color(color);
        self.scroll.redraw();
    }

    fn fit_canvas(&mut self) {
        let height = {
            let st = self.state.borrow();
            content_height(st.lines.len(), &st.look).max(self.scroll.h())
        };
        self.canvas.resize(
            self.scroll.x(),
            self.scroll.y() - self.scroll.yposition(),
            self.scroll.w() - SCROLLBAR_WIDTH,
            height,
        );
        if self.scroll.yposition() + self.scroll.h() > height {
            self.scroll.scroll_to(0, 0);
        }
    }
}

impl Default for LyricsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel height of one line: the font size scaled by the line spacing.
fn line_height(size: i32, line_spacing_tenths: u32) -> i32 {
    (size * line_spacing_tenths as i32 + 5) / 10
}

fn content_height(line_count: usize, look: &LyricsLook) -> i32 {
    line_count as i32 * line_height(look.size, look.line_spacing_tenths) + 2 * PADDING
}

/// Left edge of a line `text_width` wide inside `[left, left + width)`.
fn line_x(alignment: TextAlignment, left: i32, width: i32, text_width: i32) -> i32 {
    match alignment {
        TextAlignment::Left => left,
        TextAlignment::Center => left + (width - text_width) / 2,
        TextAlignment::Right => left + width - text_width,
    }
}

fn draw_lyrics(wid: &Widget, st: &LyricsViewState) {
    let look = st.look;
    draw::set_draw_color(look.background);
    draw::draw_rectf(wid.x(), wid.y(), wid.w(), wid.h());

    draw::set_font(look.font, look.size);
    draw::set_draw_color(look.color);
    let lh = line_height(look.size, look.line_spacing_tenths);
    let left = wid.x() + PADDING;
    let width = wid.w() - 2 * PADDING;
    let baseline_offset = (lh + draw::height()) / 2 - draw::descent();

    for (i, line) in st.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (text_width, _) = draw::measure(line, false);
        let x = line_x(look.alignment, left, width, text_width);
        let top = wid.y() + PADDING + i as i32 * lh;
        draw::draw_text(line, x, top + baseline_offset);
    }
}
