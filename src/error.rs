//! Error types for template mapping

use thiserror::Error;

/// Errors that can occur while mapping between an object graph and a template
/// document
///
/// Both kinds are fatal: they abort the whole serialize/deserialize call and
/// the caller should treat the document and the object graph as out of sync.
/// Everything else the mapper encounters (unsupported field types, unknown
/// names, empty groups) is skipped silently by design.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A sampler backed by a distribution family the template format cannot
    /// express, or a document tag no codec recognizes
    #[error("unsupported sampler kind in field '{field}'")]
    UnsupportedSamplerKind { field: String },

    /// A scalar variant decoded into a field whose declared type cannot
    /// represent it
    #[error("cannot decode {found} scalar into {declared} field '{field}'")]
    ScalarTypeMismatch {
        field: String,
        found: &'static str,
        declared: &'static str,
    },
}

impl TemplateError {
    /// Create an unsupported sampler error for a named field
    pub fn unsupported_sampler(field: impl Into<String>) -> Self {
        Self::UnsupportedSamplerKind {
            field: field.into(),
        }
    }

    /// Create a scalar mismatch error for a named field
    pub fn scalar_mismatch(
        field: impl Into<String>,
        found: &'static str,
        declared: &'static str,
    ) -> Self {
        Self::ScalarTypeMismatch {
            field: field.into(),
            found,
            declared,
        }
    }
}
