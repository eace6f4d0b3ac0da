use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors raised while configuring or attaching a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::InvalidOptions(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            WidgetError::ElementNotFound("#tabs".into()).to_string(),
            "element not found: #tabs"
        );
        assert_eq!(
            WidgetError::Dom("SecurityError".into()).to_string(),
            "DOM error: SecurityError"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(WidgetError::from(err), WidgetError::InvalidOptions(_)));
    }
}
