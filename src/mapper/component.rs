//! Component mapper: walks one component's declared fields

use crate::document::{ComponentEntry, ComponentGroup};
use crate::error::TemplateError;
use crate::graph::{ComponentFields, FieldMut, FieldRef};

use super::classify::{classify, FieldClass};
use super::parameter::{deserialize_parameter, serialize_parameter};
use super::scalar::{decode_scalar, encode_scalar};

/// Serialize every supported field of a component into a group
///
/// Numeric parameter fields delegate to the parameter mapper and are included
/// only when the nested group came back non-empty. Scalar fields encode
/// directly. Everything else, including bare sampler fields, is omitted.
pub fn serialize_component(
    component: &dyn ComponentFields,
) -> Result<ComponentGroup, TemplateError> {
    let mut group = ComponentGroup::default();
    for field in component.fields() {
        match classify(field.ty) {
            FieldClass::NestedParameter => {
                let Some(FieldRef::Parameter(parameter)) = component.field(field.name) else {
                    continue;
                };
                let nested = serialize_parameter(parameter)?;
                if nested.is_empty() {
                    continue;
                }
                group
                    .items
                    .insert(field.name.to_string(), ComponentEntry::Parameter(nested));
            }
            FieldClass::Scalar => {
                let Some(value) = component.field(field.name) else {
                    continue;
                };
                if let Some(scalar) = encode_scalar(&value) {
                    group
                        .items
                        .insert(field.name.to_string(), ComponentEntry::Scalar(scalar));
                }
            }
            FieldClass::NestedSampler | FieldClass::Unsupported => {}
        }
    }
    Ok(group)
}

/// Overlay a component group onto a live component
///
/// Mirrors the parameter mapper one level up: unknown names and structural
/// shape disagreements are ignored; nested groups delegate down; scalar
/// entries decode through the scalar codec.
pub fn deserialize_component(
    component: &mut dyn ComponentFields,
    group: &ComponentGroup,
) -> Result<(), TemplateError> {
    for (name, entry) in &group.items {
        let Some(target) = component.field_mut(name) else {
            continue;
        };
        match entry {
            ComponentEntry::Parameter(nested) => {
                let FieldMut::Parameter(parameter) = target else {
                    continue;
                };
                deserialize_parameter(parameter, nested)?;
            }
            ComponentEntry::Scalar(scalar) => {
                if matches!(target, FieldMut::Parameter(_) | FieldMut::Sampler(_)) {
                    continue;
                }
                decode_scalar(name, scalar, target)?;
            }
        }
    }
    Ok(())
}
