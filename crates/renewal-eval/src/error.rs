//! Error types for renewal evaluation
//!
//! The evaluator degrades gracefully on absent fields; the one condition
//! that fails is a timestamp that is present and needed for a comparison
//! but cannot be read as an instant.

use renewal_record::TimestampError;

/// Main evaluation error type
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Upstream sent a timestamp the evaluator could not interpret
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimestampError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use renewal_record::parse_instant;

    #[test]
    fn eval_error_display_names_the_field() {
        let err: EvalError = parse_instant("start", "not a date").unwrap_err().into();
        let rendered = err.to_string();
        assert!(rendered.contains("invalid timestamp"));
        assert!(rendered.contains("start"));
    }
}
