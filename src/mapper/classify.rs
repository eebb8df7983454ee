//! Declared-type classification of graph fields

use crate::graph::FieldType;

/// Mapping category of a field, decided from its declared type alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Delegates to the parameter mapper
    NestedParameter,
    /// Delegates to the sampler codec
    NestedSampler,
    /// Delegates to the scalar codec
    Scalar,
    /// Skipped silently in both directions
    Unsupported,
}

/// Classify a declared field type
///
/// Only numeric parameters nest; categorical parameters have no sampler-based
/// document form and are skipped entirely, like any opaque type.
pub fn classify(ty: FieldType) -> FieldClass {
    match ty {
        FieldType::NumericParameter => FieldClass::NestedParameter,
        FieldType::Sampler => FieldClass::NestedSampler,
        FieldType::String
        | FieldType::Bool
        | FieldType::F32
        | FieldType::F64
        | FieldType::Int => FieldClass::Scalar,
        FieldType::CategoricalParameter | FieldType::Opaque => FieldClass::Unsupported,
    }
}
