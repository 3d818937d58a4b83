//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (top bar, page, navigation rail, log panel, footer)
//! - Theme management
//! - Widget components (spinner, styling)
//! - Section rendering and reveal fading

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::{ColorSpec, Theme};
