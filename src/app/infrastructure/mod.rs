//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer access
//! - Platform detection and window-lifecycle policy
//! - Logger setup
//! - Error types

pub mod buffer;
pub mod error;
pub mod logging;
pub mod platform;
