//! Interchange document tree for scenario templates
//!
//! This is the loosely-typed representation produced by serialization and
//! consumed by deserialization. Every leaf value carries an explicit variant
//! tag so the document stays self-describing regardless of the text format an
//! external encoder renders it into. Maps are BTreeMaps so rendered output is
//! deterministic; key order carries no meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level interchange document: component type name -> component group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    pub components: BTreeMap<String, ComponentGroup>,
}

impl Template {
    /// Whether the document contains any component groups
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a component group by type name
    pub fn get(&self, name: &str) -> Option<&ComponentGroup> {
        self.components.get(name)
    }
}

/// Field entries serialized from a single component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentGroup {
    pub items: BTreeMap<String, ComponentEntry>,
}

impl ComponentGroup {
    /// Whether the group holds no entries; empty groups are never emitted
    /// into the template
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single component field in the document
///
/// Untagged on the wire: scalars carry a `type` tag from a closed set and
/// parameter groups are plain maps, so the two shapes never overlap. Scalar
/// is listed first so tagged leaves are matched before map fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentEntry {
    Scalar(Scalar),
    Parameter(ParameterGroup),
}

/// Field entries serialized from a single parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterGroup {
    pub items: BTreeMap<String, ParameterEntry>,
}

impl ParameterGroup {
    /// Whether the group holds no entries; empty groups are never emitted
    /// into their component group
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single parameter field in the document
///
/// Scalar must stay listed before Sampler: the sampler union accepts any
/// unrecognized `type` tag through its Unknown variant, so trying it first
/// would swallow tagged scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterEntry {
    Scalar(Scalar),
    Sampler(SamplerOption),
}

/// A tagged sampler distribution in document precision (f64)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SamplerOption {
    Constant {
        value: f64,
    },
    Uniform {
        min: f64,
        max: f64,
    },
    #[serde(rename_all = "camelCase")]
    Normal {
        min: f64,
        max: f64,
        mean: f64,
        standard_deviation: f64,
    },
    /// Unrecognized tag captured at the text-decoding boundary; rejected by
    /// the sampler codec, never produced by serialization
    #[serde(other)]
    Unknown,
}

/// A tagged leaf primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Scalar {
    String(String),
    Boolean(bool),
    Number(f64),
}

impl Scalar {
    /// Variant name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Boolean(_) => "boolean",
            Scalar::Number(_) => "number",
        }
    }
}
