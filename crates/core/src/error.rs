//! Error types for the core data model

use crate::types::ScopeKind;
use thiserror::Error;

/// Errors raised while resolving scopes and TTLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Workflow or execution scope used without an identifier
    #[error("{}", missing_id(.kind))]
    ScopeIdRequired {
        /// The scope kind that needed an identifier
        kind: ScopeKind,
    },

    /// Scope tag that is not one of `instance`, `workflow`, `execution`
    #[error("unknown scope: {0}")]
    UnknownScope(String),

    /// TTL that is negative or not a finite number
    #[error("invalid ttl: {0}")]
    InvalidTtl(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

fn missing_id(kind: &ScopeKind) -> &'static str {
    kind.missing_id_message()
}

impl Error {
    /// Check if this error is a missing scope identifier.
    pub fn is_scope_id_required(&self) -> bool {
        matches!(self, Error::ScopeIdRequired { .. })
    }
}
