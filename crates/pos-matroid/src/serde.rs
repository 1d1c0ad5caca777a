use pos_core::family::family_in_range;
use pos_core::{ErrorInfo, PosError, SchemaVersion, SetFamily};
use serde::{Deserialize, Serialize};

/// Schema version written into matroid and circuit documents.
pub const DOCUMENT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// JSON document describing a matroid by its bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatroidDocument {
    /// Schema of the payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Size of the ground set.
    pub n: usize,
    /// Bases family.
    pub bases: SetFamily,
}

/// JSON document describing a (candidate) circuit family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitDocument {
    /// Schema of the payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Size of the ground set.
    pub n: usize,
    /// Circuit family.
    pub circuits: SetFamily,
}

impl MatroidDocument {
    /// Wraps a bases family in a document stamped with the current schema.
    pub fn new(n: usize, bases: SetFamily) -> Self {
        Self {
            schema_version: DOCUMENT_SCHEMA,
            n,
            bases,
        }
    }
}

impl CircuitDocument {
    /// Wraps a circuit family in a document stamped with the current schema.
    pub fn new(n: usize, circuits: SetFamily) -> Self {
        Self {
            schema_version: DOCUMENT_SCHEMA,
            n,
            circuits,
        }
    }
}

fn check_document(schema: &SchemaVersion, family: &SetFamily, n: usize) -> Result<(), PosError> {
    if !DOCUMENT_SCHEMA.accepts(schema) {
        return Err(PosError::Serde(
            ErrorInfo::new("schema-mismatch", "unsupported document schema")
                .with_context("found", format!("{schema:?}")),
        ));
    }
    if !family_in_range(family, n) {
        return Err(PosError::Serde(
            ErrorInfo::new("out-of-range", "document references elements outside [1, n]")
                .with_context("n", n.to_string()),
        ));
    }
    Ok(())
}

/// Serialises a matroid document into indented JSON.
pub fn matroid_to_json(document: &MatroidDocument) -> Result<String, PosError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| PosError::Serde(ErrorInfo::new("matroid-serialize", err.to_string())))
}

/// Deserialises and range-checks a matroid document.
pub fn matroid_from_json(json: &str) -> Result<MatroidDocument, PosError> {
    let document: MatroidDocument = serde_json::from_str(json)
        .map_err(|err| PosError::Serde(ErrorInfo::new("matroid-deserialize", err.to_string())))?;
    check_document(&document.schema_version, &document.bases, document.n)?;
    Ok(document)
}

/// Serialises a circuit document into indented JSON.
pub fn circuits_to_json(document: &CircuitDocument) -> Result<String, PosError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| PosError::Serde(ErrorInfo::new("circuits-serialize", err.to_string())))
}

/// Deserialises and range-checks a circuit document.
pub fn circuits_from_json(json: &str) -> Result<CircuitDocument, PosError> {
    let document: CircuitDocument = serde_json::from_str(json)
        .map_err(|err| PosError::Serde(ErrorInfo::new("circuits-deserialize", err.to_string())))?;
    check_document(&document.schema_version, &document.circuits, document.n)?;
    Ok(document)
}
