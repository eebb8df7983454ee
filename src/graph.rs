//! Capability traits through which the mapper sees the object graph
//!
//! The mapper never inspects concrete component or parameter types. Each
//! object exposes its declared field set by name and type, plus borrowed
//! views for reading and overwriting field values. This replaces runtime
//! reflection with an explicit, enumerable contract that domain types
//! implement by hand (or generate).

/// Inclusive numeric range in the graph's working precision
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range {
    pub minimum: f32,
    pub maximum: f32,
}

impl Range {
    /// Create a range; `minimum <= maximum` is expected but not enforced here
    pub fn new(minimum: f32, maximum: f32) -> Self {
        Self { minimum, maximum }
    }
}

/// Closed union of distribution families the template format can express
///
/// Exactly three kinds; adding a fourth means extending the sampler codec,
/// not configuring it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Constant {
        value: f32,
    },
    Uniform {
        range: Range,
    },
    Normal {
        range: Range,
        mean: f32,
        standard_deviation: f32,
    },
}

/// Sampler capability exposed by graph-side sampler fields
///
/// `distribution` reports `None` for sampler implementations backed by a
/// family the template format cannot express; serialization then fails with
/// an unsupported-sampler error rather than guessing.
pub trait Sampler {
    /// Snapshot of the current distribution, if expressible
    fn distribution(&self) -> Option<Distribution>;

    /// Overwrite the distribution in place; deserialization never replaces
    /// the sampler instance itself
    fn set_distribution(&mut self, distribution: Distribution);
}

/// Declared type of a graph field, as reported by its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Parameter over a numeric domain, configurable through samplers
    NumericParameter,
    /// Parameter over a categorical domain; not representable in a template
    CategoricalParameter,
    /// A sampler field
    Sampler,
    String,
    Bool,
    F32,
    F64,
    Int,
    /// Any declared type the template format has no representation for
    Opaque,
}

/// A named field declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Borrowed view of a field's current value
pub enum FieldRef<'a> {
    Parameter(&'a dyn ParameterFields),
    Sampler(&'a dyn Sampler),
    Str(&'a str),
    Bool(bool),
    F32(f32),
    F64(f64),
    Int(i64),
}

/// Mutable view of a field for overlay deserialization
pub enum FieldMut<'a> {
    Parameter(&'a mut dyn ParameterFields),
    Sampler(&'a mut dyn Sampler),
    Str(&'a mut String),
    Bool(&'a mut bool),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Int(&'a mut i64),
}

impl FieldMut<'_> {
    /// Declared-type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldMut::Parameter(_) => "parameter",
            FieldMut::Sampler(_) => "sampler",
            FieldMut::Str(_) => "string",
            FieldMut::Bool(_) => "bool",
            FieldMut::F32(_) => "f32",
            FieldMut::F64(_) => "f64",
            FieldMut::Int(_) => "int",
        }
    }
}

/// Field enumeration and access for parameter objects
pub trait ParameterFields {
    /// Declared fields, in declaration order
    fn fields(&self) -> Vec<Field>;

    /// Borrow the named field's current value
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Borrow the named field for mutation
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

/// Field enumeration and access for component objects
pub trait ComponentFields {
    /// Type name used as the join key between runtime objects and document
    /// entries; must be unique among components serialized together
    fn type_name(&self) -> &str;

    /// Declared fields, in declaration order
    fn fields(&self) -> Vec<Field>;

    /// Borrow the named field's current value
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Borrow the named field for mutation
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}
