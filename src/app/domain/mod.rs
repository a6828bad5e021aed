//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The display session and its mirrored text
//! - Notification requests and timer tokens
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod mirror;
pub mod notification;
pub mod session;
pub mod settings;

pub use messages::Message;
pub use mirror::{DisplayStyle, DisplayText, PLACEHOLDER, mirror};
pub use notification::{Level, Notice, TimerToken};
pub use session::DisplaySession;
pub use settings::{AppSettings, TextAlignment, ThemeMode};
