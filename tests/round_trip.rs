//! End-to-end serialize/deserialize scenarios over a hand-built component set

use pretty_assertions::assert_eq;

use scenario_template::{
    deserialize_template, serialize_template, ComponentEntry, ComponentFields, ComponentGroup,
    Distribution, Field, FieldMut, FieldRef, FieldType, ParameterEntry, ParameterFields,
    ParameterGroup, Range, Sampler, SamplerOption, Scalar, Template, TemplateError,
};

struct TestSampler {
    distribution: Distribution,
}

impl TestSampler {
    fn uniform(minimum: f32, maximum: f32) -> Self {
        Self {
            distribution: Distribution::Uniform {
                range: Range::new(minimum, maximum),
            },
        }
    }
}

impl Sampler for TestSampler {
    fn distribution(&self) -> Option<Distribution> {
        Some(self.distribution)
    }

    fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = distribution;
    }
}

/// Sampler backed by a distribution family the template format cannot express
struct ExoticSampler;

impl Sampler for ExoticSampler {
    fn distribution(&self) -> Option<Distribution> {
        None
    }

    fn set_distribution(&mut self, _distribution: Distribution) {}
}

/// Numeric parameter holding a single sampler field
struct NumericParameter<S: Sampler> {
    value: S,
}

impl<S: Sampler> ParameterFields for NumericParameter<S> {
    fn fields(&self) -> Vec<Field> {
        vec![Field::new("value", FieldType::Sampler)]
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "value" => Some(FieldRef::Sampler(&self.value)),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "value" => Some(FieldMut::Sampler(&mut self.value)),
            _ => None,
        }
    }
}

/// Test component mirroring the shape of a spawn randomizer: one numeric
/// parameter, a few scalars of each supported width, and fields the format
/// skips
struct Spawner {
    count: NumericParameter<TestSampler>,
    label: String,
    enabled: bool,
    spawn_rate: f32,
    max_items: i64,
}

impl Spawner {
    fn new() -> Self {
        Self {
            count: NumericParameter {
                value: TestSampler::uniform(1.0, 5.0),
            },
            label: "x".to_string(),
            enabled: true,
            spawn_rate: 0.5,
            max_items: 100,
        }
    }

    /// Same shape, different values; the overlay target in round trips
    fn blank() -> Self {
        Self {
            count: NumericParameter {
                value: TestSampler::uniform(0.0, 0.0),
            },
            label: String::new(),
            enabled: false,
            spawn_rate: 0.0,
            max_items: 0,
        }
    }
}

impl ComponentFields for Spawner {
    fn type_name(&self) -> &str {
        "Spawner"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("count", FieldType::NumericParameter),
            Field::new("label", FieldType::String),
            Field::new("enabled", FieldType::Bool),
            Field::new("spawn_rate", FieldType::F32),
            Field::new("max_items", FieldType::Int),
            Field::new("prefab", FieldType::Opaque),
            Field::new("category", FieldType::CategoricalParameter),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "count" => Some(FieldRef::Parameter(&self.count)),
            "label" => Some(FieldRef::Str(&self.label)),
            "enabled" => Some(FieldRef::Bool(self.enabled)),
            "spawn_rate" => Some(FieldRef::F32(self.spawn_rate)),
            "max_items" => Some(FieldRef::Int(self.max_items)),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "count" => Some(FieldMut::Parameter(&mut self.count)),
            "label" => Some(FieldMut::Str(&mut self.label)),
            "enabled" => Some(FieldMut::Bool(&mut self.enabled)),
            "spawn_rate" => Some(FieldMut::F32(&mut self.spawn_rate)),
            "max_items" => Some(FieldMut::Int(&mut self.max_items)),
            _ => None,
        }
    }
}

#[test]
fn test_round_trip_spawner() {
    let source = Spawner::new();
    let template =
        serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");

    let mut target = Spawner::blank();
    deserialize_template([&mut target as &mut dyn ComponentFields], &template)
        .expect("Should deserialize");

    assert_eq!(
        target.count.value.distribution,
        Distribution::Uniform {
            range: Range::new(1.0, 5.0)
        }
    );
    assert_eq!(target.label, "x");
    assert!(target.enabled);
    assert_eq!(target.spawn_rate, 0.5);
    assert_eq!(target.max_items, 100);
}

#[test]
fn test_normal_distribution_round_trip() {
    let mut source = Spawner::new();
    source.count.value.distribution = Distribution::Normal {
        range: Range::new(0.0, 10.0),
        mean: 5.0,
        standard_deviation: 1.0,
    };
    let template =
        serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");

    let mut target = Spawner::blank();
    deserialize_template([&mut target as &mut dyn ComponentFields], &template)
        .expect("Should deserialize");

    assert_eq!(
        target.count.value.distribution,
        Distribution::Normal {
            range: Range::new(0.0, 10.0),
            mean: 5.0,
            standard_deviation: 1.0,
        }
    );
}

#[test]
fn test_unsupported_fields_omitted_from_document() {
    let source = Spawner::new();
    let template =
        serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");

    let group = template.get("Spawner").expect("Spawner should be present");
    assert!(!group.items.contains_key("prefab"));
    assert!(!group.items.contains_key("category"));
    assert_eq!(group.items.len(), 5);
}

/// Component with no representable fields at all
struct Inert;

impl ComponentFields for Inert {
    fn type_name(&self) -> &str {
        "Inert"
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("handle", FieldType::Opaque)]
    }

    fn field(&self, _name: &str) -> Option<FieldRef<'_>> {
        None
    }

    fn field_mut(&mut self, _name: &str) -> Option<FieldMut<'_>> {
        None
    }
}

#[test]
fn test_empty_component_not_emitted_and_overlay_is_noop() {
    let inert = Inert;
    let template = serialize_template([&inert as &dyn ComponentFields]).expect("Should serialize");
    assert!(template.is_empty());

    // Deserializing the empty template back is idempotent, not an error
    let mut inert = Inert;
    deserialize_template([&mut inert as &mut dyn ComponentFields], &template)
        .expect("Should deserialize");
}

/// Parameter with nothing the template format can represent; its owner
/// serializes to an empty group and disappears from the document
struct EmptyParameter;

impl ParameterFields for EmptyParameter {
    fn fields(&self) -> Vec<Field> {
        vec![Field::new("internal", FieldType::Opaque)]
    }

    fn field(&self, _name: &str) -> Option<FieldRef<'_>> {
        None
    }

    fn field_mut(&mut self, _name: &str) -> Option<FieldMut<'_>> {
        None
    }
}

struct HollowComponent {
    placeholder: EmptyParameter,
}

impl ComponentFields for HollowComponent {
    fn type_name(&self) -> &str {
        "HollowComponent"
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("placeholder", FieldType::NumericParameter)]
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "placeholder" => Some(FieldRef::Parameter(&self.placeholder)),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "placeholder" => Some(FieldMut::Parameter(&mut self.placeholder)),
            _ => None,
        }
    }
}

#[test]
fn test_component_with_only_empty_parameter_never_appears() {
    let hollow = HollowComponent {
        placeholder: EmptyParameter,
    };
    let template =
        serialize_template([&hollow as &dyn ComponentFields]).expect("Should serialize");
    assert!(template.is_empty());
}

#[test]
fn test_unknown_component_name_is_noop() {
    let source = Spawner::new();
    let template =
        serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");

    // Overlay onto a set that does not contain a Spawner at all
    let mut inert = Inert;
    deserialize_template([&mut inert as &mut dyn ComponentFields], &template)
        .expect("Unknown component names are not errors");
}

#[test]
fn test_unknown_field_name_is_noop() {
    let mut group = ComponentGroup::default();
    group.items.insert(
        "renamed_field".to_string(),
        ComponentEntry::Scalar(Scalar::Number(1.0)),
    );
    let mut template = Template::default();
    template.components.insert("Spawner".to_string(), group);

    let mut target = Spawner::new();
    deserialize_template([&mut target as &mut dyn ComponentFields], &template)
        .expect("Unknown field names are not errors");
    assert_eq!(target.max_items, 100);
}

#[test]
fn test_encode_unsupported_sampler_kind_fails() {
    struct ExoticSpawner {
        count: NumericParameter<ExoticSampler>,
    }

    impl ComponentFields for ExoticSpawner {
        fn type_name(&self) -> &str {
            "ExoticSpawner"
        }

        fn fields(&self) -> Vec<Field> {
            vec![Field::new("count", FieldType::NumericParameter)]
        }

        fn field(&self, name: &str) -> Option<FieldRef<'_>> {
            match name {
                "count" => Some(FieldRef::Parameter(&self.count)),
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
            match name {
                "count" => Some(FieldMut::Parameter(&mut self.count)),
                _ => None,
            }
        }
    }

    let component = ExoticSpawner {
        count: NumericParameter {
            value: ExoticSampler,
        },
    };
    let result = serialize_template([&component as &dyn ComponentFields]);
    assert!(matches!(
        result,
        Err(TemplateError::UnsupportedSamplerKind { .. })
    ));
}

#[test]
fn test_decode_boolean_into_int_field_fails() {
    let mut group = ComponentGroup::default();
    group.items.insert(
        "max_items".to_string(),
        ComponentEntry::Scalar(Scalar::Boolean(true)),
    );
    let mut template = Template::default();
    template.components.insert("Spawner".to_string(), group);

    let mut target = Spawner::new();
    let result = deserialize_template([&mut target as &mut dyn ComponentFields], &template);
    assert!(matches!(
        result,
        Err(TemplateError::ScalarTypeMismatch { .. })
    ));
}

#[test]
fn test_decode_number_into_int_field_truncates() {
    let mut nested = ParameterGroup::default();
    nested.items.insert(
        "value".to_string(),
        ParameterEntry::Sampler(SamplerOption::Constant { value: 2.0 }),
    );
    let mut group = ComponentGroup::default();
    group
        .items
        .insert("count".to_string(), ComponentEntry::Parameter(nested));
    group.items.insert(
        "max_items".to_string(),
        ComponentEntry::Scalar(Scalar::Number(64.7)),
    );
    let mut template = Template::default();
    template.components.insert("Spawner".to_string(), group);

    let mut target = Spawner::new();
    deserialize_template([&mut target as &mut dyn ComponentFields], &template)
        .expect("Should deserialize");
    assert_eq!(target.max_items, 64);
    assert_eq!(
        target.count.value.distribution,
        Distribution::Constant { value: 2.0 }
    );
}

#[test]
fn test_serialize_is_deterministic() {
    let source = Spawner::new();
    let first = serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");
    let second = serialize_template([&source as &dyn ComponentFields]).expect("Should serialize");
    assert_eq!(first, second);
}
