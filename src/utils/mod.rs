//! Utility functions shared across the application.

pub mod highlight;
pub mod text;
