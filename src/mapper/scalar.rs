//! Scalar codec: primitive field values to and from tagged document scalars

use crate::document::Scalar;
use crate::error::TemplateError;
use crate::graph::{FieldMut, FieldRef};

/// Encode a field value view as a tagged scalar
///
/// Numeric widths all widen to f64 in the document. Returns `None` for views
/// with no scalar representation; callers skip those fields rather than
/// treating them as errors.
pub fn encode_scalar(value: &FieldRef<'_>) -> Option<Scalar> {
    match value {
        FieldRef::Str(s) => Some(Scalar::String((*s).to_string())),
        FieldRef::Bool(b) => Some(Scalar::Boolean(*b)),
        FieldRef::F32(v) => Some(Scalar::Number(f64::from(*v))),
        FieldRef::F64(v) => Some(Scalar::Number(*v)),
        FieldRef::Int(v) => Some(Scalar::Number(*v as f64)),
        FieldRef::Parameter(_) | FieldRef::Sampler(_) => None,
    }
}

/// Decode a tagged scalar into a field, converting to the declared target
/// type rather than the document's numeric width
///
/// Numbers narrow to f32 or truncate toward zero into integer fields. A
/// variant the target's declared type cannot represent is a fatal mismatch.
pub fn decode_scalar(
    field: &str,
    scalar: &Scalar,
    target: FieldMut<'_>,
) -> Result<(), TemplateError> {
    match (scalar, target) {
        (Scalar::String(s), FieldMut::Str(slot)) => {
            *slot = s.clone();
            Ok(())
        }
        (Scalar::Boolean(b), FieldMut::Bool(slot)) => {
            *slot = *b;
            Ok(())
        }
        (Scalar::Number(n), FieldMut::F32(slot)) => {
            *slot = *n as f32;
            Ok(())
        }
        (Scalar::Number(n), FieldMut::F64(slot)) => {
            *slot = *n;
            Ok(())
        }
        (Scalar::Number(n), FieldMut::Int(slot)) => {
            *slot = *n as i64;
            Ok(())
        }
        (scalar, target) => Err(TemplateError::scalar_mismatch(
            field,
            scalar.kind(),
            target.kind(),
        )),
    }
}
