//! Template mapper: top-level orchestration over a set of components

use std::collections::HashMap;

use crate::document::Template;
use crate::error::TemplateError;
use crate::graph::ComponentFields;

use super::component::{deserialize_component, serialize_component};

/// Serialize a collection of components into a fresh template document
///
/// Components whose group came back empty are omitted entirely. Type names
/// are the join key and must be unique within the input set; duplicates are a
/// caller error and are not detected here.
pub fn serialize_template<'a, I>(components: I) -> Result<Template, TemplateError>
where
    I: IntoIterator<Item = &'a dyn ComponentFields>,
{
    let mut template = Template::default();
    for component in components {
        let group = serialize_component(component)?;
        if group.is_empty() {
            continue;
        }
        template
            .components
            .insert(component.type_name().to_string(), group);
    }
    Ok(template)
}

/// Overlay a template document onto a collection of live components
///
/// A partial overlay, never a full replace: template entries with no matching
/// component are skipped, and components absent from the template are left
/// untouched.
pub fn deserialize_template<'a, I>(components: I, template: &Template) -> Result<(), TemplateError>
where
    I: IntoIterator<Item = &'a mut dyn ComponentFields>,
{
    let mut by_name: HashMap<String, &'a mut dyn ComponentFields> = HashMap::new();
    for component in components {
        let name = component.type_name().to_string();
        by_name.insert(name, component);
    }

    for (name, group) in &template.components {
        let Some(component) = by_name.get_mut(name) else {
            continue;
        };
        deserialize_component(&mut **component, group)?;
    }
    Ok(())
}
