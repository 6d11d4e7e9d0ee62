//! Per-item type expressions for the generated JSDoc block.
//!
//! Both functions are pure: the same definition always renders to the same
//! text. Nothing is escaped; see `SchemaDocument::lint` for the checks that
//! flag values which would corrupt the output.
use crate::schema::{BlockDefinition, PropertyDefinition, PropertyKind};

pub const BOOLEAN_TYPE: &str = "boolean";
pub const UNDEFINED_TYPE: &str = "undefined";

const UNION_SEPARATOR: &str = " | ";

/// Value type of a single property: `boolean`, a numeric literal union or
/// a string literal union.
pub fn render_property_type(property: &PropertyDefinition) -> String {
    match property.kind {
        PropertyKind::Boolean => BOOLEAN_TYPE.to_string(),
        PropertyKind::Integer => property
            .domain
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(UNION_SEPARATOR),
        PropertyKind::String => property
            .domain
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(UNION_SEPARATOR),
    }
}

/// Shape of the property object a block accepts. Every field is optional and
/// typed by the property's own alias.
pub fn render_block_properties_type(block: &BlockDefinition) -> String {
    if block.property_names.is_empty() {
        return UNDEFINED_TYPE.to_string();
    }
    let fields = block
        .property_names
        .iter()
        .map(|name| format!("{name}?: {name}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {fields} }}")
}
