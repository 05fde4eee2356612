//! Unified error type for scopekv.
//!
//! Wraps the core error and presents a stable interface to callers.

use scopekv_core::ScopeKind;
use thiserror::Error;

/// All scopekv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Workflow or execution scope used without an identifier
    #[error("{}", missing_id(.kind))]
    ScopeIdRequired {
        /// The scope kind that needed an identifier
        kind: ScopeKind,
    },

    /// Unrecognised scope tag
    #[error("unknown scope: {0}")]
    UnknownScope(String),

    /// Negative or non-finite TTL
    #[error("invalid ttl: {0}")]
    InvalidTtl(String),

    /// Store configuration that could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for scopekv operations.
pub type Result<T> = std::result::Result<T, Error>;

fn missing_id(kind: &ScopeKind) -> &'static str {
    kind.missing_id_message()
}

impl Error {
    /// Check if this is a missing scope identifier.
    pub fn is_scope_id_required(&self) -> bool {
        matches!(self, Error::ScopeIdRequired { .. })
    }

    /// Check if the caller supplied malformed input (scope tag, TTL or config).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::UnknownScope(_) | Error::InvalidTtl(_) | Error::InvalidConfig(_)
        )
    }
}

// Convert from internal core errors
impl From<scopekv_core::Error> for Error {
    fn from(e: scopekv_core::Error) -> Self {
        use scopekv_core::Error as CoreError;
        match e {
            CoreError::ScopeIdRequired { kind } => Error::ScopeIdRequired { kind },
            CoreError::UnknownScope(tag) => Error::UnknownScope(tag),
            CoreError::InvalidTtl(ttl) => Error::InvalidTtl(ttl),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
