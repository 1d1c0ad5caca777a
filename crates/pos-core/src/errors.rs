//! Structured error types shared across positroid crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::family::{describe_family, describe_set};
use crate::set::{ElementSet, SetFamily};

/// Structured payload attached to every [`PosError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (sets, offsets, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Adds a set to the context, rendered as `{1,2,3}`.
    pub fn with_set(self, key: impl Into<String>, set: &ElementSet) -> Self {
        self.with_context(key, describe_set(set))
    }

    /// Adds a family to the context, rendered compactly and truncated for
    /// large families.
    pub fn with_family(self, key: impl Into<String>, family: &SetFamily) -> Self {
        self.with_context(key, describe_family(family))
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the positroid workspace.
///
/// Every variant is a precondition violation: the caller handed in an input
/// of the wrong shape. Failing a matroid or necklace axiom is not an error
/// and is reported through ordinary `bool`/`Option` results instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PosError {
    /// Set-family shape errors (empty families, mixed sizes).
    #[error("family error: {0}")]
    Family(ErrorInfo),
    /// Matroid checker and enumerator errors.
    #[error("matroid error: {0}")]
    Matroid(ErrorInfo),
    /// Matroid closure errors.
    #[error("closure error: {0}")]
    Closure(ErrorInfo),
    /// Cyclic order errors.
    #[error("order error: {0}")]
    Order(ErrorInfo),
    /// Grassmann necklace and decorated permutation errors.
    #[error("necklace error: {0}")]
    Necklace(ErrorInfo),
    /// Le-diagram errors.
    #[error("diagram error: {0}")]
    Diagram(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let context = self
                .context
                .iter()
                .format_with("; ", |(key, value), g| g(&format_args!("{key}: {value}")));
            write!(f, " ({context})")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, ", try: {hint}")?;
        }
        Ok(())
    }
}

impl PosError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PosError::Family(info)
            | PosError::Matroid(info)
            | PosError::Closure(info)
            | PosError::Order(info)
            | PosError::Necklace(info)
            | PosError::Diagram(info)
            | PosError::Serde(info) => info,
        }
    }

    /// Returns the stable code of the underlying payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
