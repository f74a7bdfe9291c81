use thiserror::Error;

/// Failures the triage core can surface to its caller.
///
/// Only `InvalidInput` aborts an evaluation. Knowledge-pack variants are
/// raised once, at load time. Unknown references discovered while scoring
/// degrade to diagnostics on the result instead of erroring.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Invalid intake record: {0}")]
    InvalidInput(String),

    #[error("Knowledge pack load failed ({0}): {1}")]
    KnowledgePackLoad(String, String),

    #[error("Knowledge pack parse failed ({0}): {1}")]
    KnowledgePackParse(String, String),

    #[error("Knowledge pack validation failed: {0}")]
    KnowledgePackValidation(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
