//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct, the single store every mutation goes through
//! - Section visibility tracking and the navigation rail
//! - Staged reveal and typewriter animations
//! - Contact form lifecycle
//! - State error handling

mod contact;
mod error;
mod navigation;
mod reveal;
mod tracker;
mod typewriter;

pub use contact::{ContactForm, FailureReason, SubmissionStatus, SubmitRejected};
pub use error::StateError;
pub use navigation::{
    Focus, FormField, NavControl, NavigationIndicator, ScrollCommand, SmoothScroll,
    SMOOTH_SCROLL_DURATION,
};
pub use reveal::{
    intersection_ratio, stagger_delay, stagger_step, Appearance, RevealAnimator, RevealKey,
    RevealRegistry, RevealTarget, DEFAULT_REVEAL_DURATION, REVEAL_OFFSET_COLUMNS,
};
pub use tracker::{SectionBounds, VisibilityTracker, DEFAULT_PROBE_DIVISOR};
pub use typewriter::{Ellipsis, Typewriter, TypewriterTimings};

// State struct, methods and settings are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, StateSettings, WHEEL_STEP};
