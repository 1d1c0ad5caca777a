use pos_core::{ErrorInfo, PosError, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::necklace::GrassmannNecklace;
use crate::permutation::DecoratedPermutation;

/// Schema version written into necklace documents.
pub const NECKLACE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// JSON document carrying a Grassmann necklace and, optionally, its
/// decorated permutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NecklaceDocument {
    /// Schema of the payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// The necklace itself; validated while deserialising.
    pub necklace: GrassmannNecklace,
    /// Decorated permutation of the necklace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permutation: Option<DecoratedPermutation>,
}

impl NecklaceDocument {
    /// Wraps a necklace together with its decorated permutation.
    pub fn new(necklace: GrassmannNecklace) -> Result<Self, PosError> {
        let permutation = DecoratedPermutation::from_necklace(&necklace)?;
        Ok(Self {
            schema_version: NECKLACE_SCHEMA,
            necklace,
            permutation: Some(permutation),
        })
    }
}

/// Serialises a necklace document into indented JSON.
pub fn necklace_to_json(document: &NecklaceDocument) -> Result<String, PosError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| PosError::Serde(ErrorInfo::new("necklace-serialize", err.to_string())))
}

/// Deserialises a necklace document, checking the schema and that any
/// embedded permutation agrees with the necklace.
pub fn necklace_from_json(json: &str) -> Result<NecklaceDocument, PosError> {
    let document: NecklaceDocument = serde_json::from_str(json)
        .map_err(|err| PosError::Serde(ErrorInfo::new("necklace-deserialize", err.to_string())))?;
    if !NECKLACE_SCHEMA.accepts(&document.schema_version) {
        return Err(PosError::Serde(
            ErrorInfo::new("schema-mismatch", "unsupported document schema")
                .with_context("found", format!("{:?}", document.schema_version)),
        ));
    }
    if let Some(permutation) = &document.permutation {
        if permutation.to_necklace()? != document.necklace {
            return Err(PosError::Serde(
                ErrorInfo::new("permutation-mismatch", "permutation does not match the necklace")
                    .with_hint("drop the permutation field to have it recomputed"),
            ));
        }
    }
    Ok(document)
}
