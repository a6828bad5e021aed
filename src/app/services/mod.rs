//! Services layer - operations that talk to the outside world.
//!
//! - Clipboard access and the worker threads that keep it off the UI thread

pub mod clipboard;
