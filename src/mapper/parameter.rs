//! Parameter mapper: walks one parameter object's declared fields

use crate::document::{ParameterEntry, ParameterGroup};
use crate::error::TemplateError;
use crate::graph::{FieldMut, FieldRef, ParameterFields};

use super::classify::{classify, FieldClass};
use super::sampler::{decode_sampler, encode_sampler};
use super::scalar::{decode_scalar, encode_scalar};

/// Serialize every supported field of a parameter into a group
///
/// Sampler fields encode through the sampler codec, scalar fields through the
/// scalar codec, everything else is omitted. May return an empty group; the
/// component mapper never emits those.
pub fn serialize_parameter(
    parameter: &dyn ParameterFields,
) -> Result<ParameterGroup, TemplateError> {
    let mut group = ParameterGroup::default();
    for field in parameter.fields() {
        match classify(field.ty) {
            FieldClass::NestedSampler => {
                let Some(FieldRef::Sampler(sampler)) = parameter.field(field.name) else {
                    continue;
                };
                let option = encode_sampler(field.name, sampler)?;
                group
                    .items
                    .insert(field.name.to_string(), ParameterEntry::Sampler(option));
            }
            FieldClass::Scalar => {
                let Some(value) = parameter.field(field.name) else {
                    continue;
                };
                if let Some(scalar) = encode_scalar(&value) {
                    group
                        .items
                        .insert(field.name.to_string(), ParameterEntry::Scalar(scalar));
                }
            }
            // Parameters do not nest inside parameters
            FieldClass::NestedParameter | FieldClass::Unsupported => {}
        }
    }
    Ok(group)
}

/// Overlay a parameter group onto a live parameter object
///
/// Entries with no same-named target field are ignored for schema drift
/// tolerance, as are entries whose structural shape disagrees with the
/// target. Scalar variant mismatches and unknown sampler tags are fatal.
pub fn deserialize_parameter(
    parameter: &mut dyn ParameterFields,
    group: &ParameterGroup,
) -> Result<(), TemplateError> {
    for (name, entry) in &group.items {
        let Some(target) = parameter.field_mut(name) else {
            continue;
        };
        match entry {
            ParameterEntry::Sampler(option) => {
                let FieldMut::Sampler(sampler) = target else {
                    continue;
                };
                sampler.set_distribution(decode_sampler(name, option)?);
            }
            ParameterEntry::Scalar(scalar) => {
                if matches!(target, FieldMut::Parameter(_) | FieldMut::Sampler(_)) {
                    continue;
                }
                decode_scalar(name, scalar, target)?;
            }
        }
    }
    Ok(())
}
