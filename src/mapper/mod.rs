//! The generic mapping engine between object graphs and template documents
//!
//! Leaves first: the scalar and sampler codecs convert individual values, the
//! classifier decides what a declared field type means, and the parameter,
//! component, and template mappers walk the graph one level each.

mod classify;
mod component;
mod parameter;
mod sampler;
mod scalar;
mod template;

pub use classify::{classify, FieldClass};
pub use component::{deserialize_component, serialize_component};
pub use parameter::{deserialize_parameter, serialize_parameter};
pub use sampler::{decode_sampler, encode_sampler};
pub use scalar::{decode_scalar, encode_scalar};
pub use template::{deserialize_template, serialize_template};
