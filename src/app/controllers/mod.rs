//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controllers that sit between the domain
//! models and the UI:
//! - Message dispatch for the display session
//! - The toast and its dismissal timer
//! - The effect vocabulary handed to the UI layer

pub mod dispatch;
pub mod effects;
pub mod notifications;

pub use dispatch::{Controller, DisplayPrefs};
pub use effects::Effect;
pub use notifications::{NotificationController, ToastState};
