//! Scope types for the scoped store
//!
//! This module defines how stored keys are partitioned:
//! - [`ScopeKind`]: the three partition families (instance, workflow, execution)
//! - [`Scope`]: a resolved partition, carrying its identifier where one is needed

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Partition family for stored keys
///
/// `Global` is a single instance-wide mapping. `Workflow` and `Execution`
/// hold one mapping per identifier.
///
/// # Examples
///
/// ```
/// use scopekv_core::ScopeKind;
///
/// let kind: ScopeKind = "workflow".parse().unwrap();
/// assert_eq!(kind, ScopeKind::Workflow);
/// assert_eq!(ScopeKind::Global.to_string(), "instance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    /// Shared by every workflow in the process
    #[serde(rename = "instance", alias = "global")]
    Global,
    /// One mapping per workflow identifier
    Workflow,
    /// One mapping per execution identifier
    Execution,
}

impl ScopeKind {
    /// All scope kinds, in declaration order
    pub const ALL: [ScopeKind; 3] = [ScopeKind::Global, ScopeKind::Workflow, ScopeKind::Execution];

    /// Tag used by callers to select this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Global => "instance",
            ScopeKind::Workflow => "workflow",
            ScopeKind::Execution => "execution",
        }
    }

    /// Whether operations on this kind need a scope identifier
    pub fn requires_id(&self) -> bool {
        !matches!(self, ScopeKind::Global)
    }

    /// Message reported when an identifier is missing
    pub fn missing_id_message(&self) -> &'static str {
        match self {
            ScopeKind::Global => "Instance scope does not take an ID",
            ScopeKind::Workflow => "Workflow scope requires a workflow ID",
            ScopeKind::Execution => "Execution scope requires an execution ID",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instance" | "global" => Ok(ScopeKind::Global),
            "workflow" => Ok(ScopeKind::Workflow),
            "execution" => Ok(ScopeKind::Execution),
            _ => Err(Error::UnknownScope(s.to_string())),
        }
    }
}

/// A resolved partition
///
/// Workflow and execution scopes carry their identifier, so a `Scope` can
/// never be missing one. The [`Scope::workflow`] and [`Scope::execution`]
/// constructors take the identifier as given, including `""`; use
/// [`Scope::resolve`] to reject empty identifiers from callers.
///
/// # Examples
///
/// ```
/// use scopekv_core::{Scope, ScopeKind};
///
/// let scope = Scope::resolve(ScopeKind::Workflow, Some("wf-1")).unwrap();
/// assert_eq!(scope, Scope::workflow("wf-1"));
/// assert!(Scope::resolve(ScopeKind::Execution, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// The instance-wide mapping
    Global,
    /// The mapping for one workflow
    Workflow(String),
    /// The mapping for one execution
    Execution(String),
}

impl Scope {
    /// Scope for a workflow identifier, unchecked
    pub fn workflow(id: impl Into<String>) -> Self {
        Scope::Workflow(id.into())
    }

    /// Scope for an execution identifier, unchecked
    pub fn execution(id: impl Into<String>) -> Self {
        Scope::Execution(id.into())
    }

    /// Resolve a kind and an optional identifier into a scope
    ///
    /// The identifier is ignored for [`ScopeKind::Global`]. For the other
    /// kinds a missing or empty identifier fails with
    /// [`Error::ScopeIdRequired`].
    pub fn resolve(kind: ScopeKind, scope_id: Option<&str>) -> Result<Self> {
        let id = match (kind, scope_id) {
            (ScopeKind::Global, _) => return Ok(Scope::Global),
            (_, Some(id)) if !id.is_empty() => id.to_string(),
            _ => return Err(Error::ScopeIdRequired { kind }),
        };
        Ok(match kind {
            ScopeKind::Workflow => Scope::Workflow(id),
            _ => Scope::Execution(id),
        })
    }

    /// The kind of this scope
    pub fn kind(&self) -> ScopeKind {
        match self {
            Scope::Global => ScopeKind::Global,
            Scope::Workflow(_) => ScopeKind::Workflow,
            Scope::Execution(_) => ScopeKind::Execution,
        }
    }

    /// The scope identifier, if this kind has one
    pub fn id(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Workflow(id) | Scope::Execution(id) => Some(id),
        }
    }
}

impl fmt::Display for Scope {
    /// Displays as `instance`, `workflow/<id>` or `execution/<id>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{}/{}", self.kind(), id),
            None => write!(f, "{}", self.kind()),
        }
    }
}
