//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DisplaySession, Notice, Settings, Messages)
//! - `controllers/` - Orchestration (Controller dispatch, NotificationController)
//! - `services/` - Clipboard access
//! - `infrastructure/` - External integrations (FLTK buffer, platform, logging, error)
//! - `state.rs` - Applies controller effects to the FLTK widgets

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{Controller, DisplayPrefs, Effect};
pub use domain::{AppSettings, DisplayText, Message, ThemeMode};
pub use infrastructure::platform::{Platform, detect_system_dark_mode};
