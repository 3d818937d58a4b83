//! Terminal rendition of a single-page developer portfolio.
//!
//! The page is a column of sections (home, about, skills, experience,
//! projects, why, contact) that the visitor scrolls through. A navigation
//! rail follows the section under the probe point, content fades in the first
//! time it scrolls into view, the hero types out a code sample, and the
//! contact form posts to an external form relay.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod relay;
pub mod sound;
pub mod state;
pub mod timer;
pub mod ui;
pub mod utils;
