//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Section identifier not part of the page
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Section exists but has not been laid out yet
    #[error("Section not laid out: {0}")]
    SectionNotLaidOut(String),

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::UnknownSection("blog".to_string());
        assert!(error.to_string().contains("Unknown section"));
        assert!(error.to_string().contains("blog"));

        let error = StateError::SectionNotLaidOut("why".to_string());
        assert!(error.to_string().contains("not laid out"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("State error"));
        assert!(error.to_string().contains("Generic error"));
    }
}
