use thiserror::Error;

use psychaid_core::error::CoreError;

/// Errors a caller of the analysis pipeline can observe.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("validation failed: {0}")]
    Validation(#[from] CoreError),
}

/// Failures inside a narrative provider. These never cross the selector:
/// they are logged and turned into a rule-table fallback.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
