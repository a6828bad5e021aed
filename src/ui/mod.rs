pub mod dialogs;
pub mod lyrics_view;
pub mod main_window;
pub mod menu;
pub mod theme;
