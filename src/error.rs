//! Error taxonomy for persisted portfolio state.

use thiserror::Error;

/// Failure to interpret a persisted portfolio value.
///
/// Callers recover by falling back to the seed catalog; nothing here is
/// fatal to the running page.
#[derive(Debug, Error)]
pub enum StateError {
    /// The stored value is not valid JSON, or parses to a shape that is
    /// neither a versioned envelope nor a legacy record array.
    #[error("malformed portfolio state: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A versioned envelope from a schema this build does not understand.
    #[error("unsupported portfolio schema version {0}")]
    UnsupportedVersion(u32),
}
