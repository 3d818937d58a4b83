//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: contact relay submissions
//! - Terminal events: keyboard, mouse and tick input

pub mod network;
pub mod terminal;
