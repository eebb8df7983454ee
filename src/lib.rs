//! Scenario Template - generic mapping between typed configuration graphs
//! and tagged interchange documents
//!
//! This library serializes a set of "component" objects (each owning named
//! parameters, samplers, and scalar fields) into a loosely-typed, tagged
//! template document, and overlays such documents back onto live component
//! instances. The mapper has no component-specific code: domain types expose
//! their declared field sets through the capability traits in [`graph`], and
//! the engine in [`mapper`] does the rest.
//!
//! Text encoding of the document is an external concern; every document type
//! derives serde traits so any serde format can carry it.
//!
//! # Example
//!
//! ```rust
//! use scenario_template::{
//!     serialize_template, ComponentFields, Field, FieldMut, FieldRef, FieldType,
//! };
//!
//! struct Fog {
//!     enabled: bool,
//! }
//!
//! impl ComponentFields for Fog {
//!     fn type_name(&self) -> &str {
//!         "Fog"
//!     }
//!
//!     fn fields(&self) -> Vec<Field> {
//!         vec![Field::new("enabled", FieldType::Bool)]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldRef<'_>> {
//!         match name {
//!             "enabled" => Some(FieldRef::Bool(self.enabled)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
//!         match name {
//!             "enabled" => Some(FieldMut::Bool(&mut self.enabled)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let fog = Fog { enabled: true };
//! let template = serialize_template([&fog as &dyn ComponentFields]).unwrap();
//! assert!(template.get("Fog").is_some());
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod mapper;

pub use document::{
    ComponentEntry, ComponentGroup, ParameterEntry, ParameterGroup, SamplerOption, Scalar,
    Template,
};
pub use error::TemplateError;
pub use graph::{
    ComponentFields, Distribution, Field, FieldMut, FieldRef, FieldType, ParameterFields, Range,
    Sampler,
};
pub use mapper::{deserialize_template, serialize_template};
