use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the parsing, cache and configuration layers.
#[derive(Debug, Error)]
pub enum BeehiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid key pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Unknown category `{input}`{}", suggestion_hint(.suggestion))]
    InvalidCategory {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("Invalid cron expression `{expression}`: {reason}")]
    InvalidCron { expression: String, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BeehiveError>;

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(code) => format!(" (did you mean `{code}`?)"),
        None => String::new(),
    }
}

impl BeehiveError {
    pub(crate) fn invalid_cron(expression: &str, reason: impl Into<String>) -> Self {
        BeehiveError::InvalidCron {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_error_mentions_suggestion() {
        let err = BeehiveError::InvalidCategory {
            input: "GROCERIE".into(),
            suggestion: Some("GROCERIES"),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category `GROCERIE` (did you mean `GROCERIES`?)"
        );
    }

    #[test]
    fn category_error_without_suggestion() {
        let err = BeehiveError::InvalidCategory {
            input: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown category `zzz`");
    }
}
