//! Assembles the final `typedBlockPermutation-*.js` module text.
//!
//! Layout:
//! - `PROLOGUE` (import + comment opener)
//! - one `@typedef` per property
//! - `BlockPropertyMap`: property name → property alias
//! - `BlockPropertiesMap`: block name → accepted property object
//! - `EPILOGUE` (comment closer + the typed wrapper object)
//!
//! The prologue and epilogue are consumed by downstream tooling that reads
//! the comment block as a type source; keep them byte-identical.
use crate::render::{render_block_properties_type, render_property_type};
use crate::schema::SchemaDocument;

pub const PROLOGUE: &str = r#"import { BlockPermutation } from "@minecraft/server";

/**
"#;

const PROPERTY_MAP_OPEN: &str = " * \n * @typedef { {";
const PROPERTIES_MAP_OPEN: &str = "} } BlockPropertyMap\n * \n * @typedef { {";

pub const EPILOGUE: &str = r#" } } BlockPropertiesMap
 */

export default {
  /**
   * @template {keyof BlockPropertiesMap} B
   * @param {B} blockName
   * @param {BlockPropertiesMap[B]} properties
   * @returns {BlockPermutation}
   */
  resolve(blockName, properties) {
    return BlockPermutation.resolve(blockName, properties);
  },

  /**
   * @template {keyof BlockPropertiesMap} B
   * @param {BlockPermutation} permutation
   * @param {B} blockName
   * @param {BlockPropertiesMap[B]} properties
   * @returns {boolean}
   */
  matches(permutation, blockName, properties) {
    return permutation.matches(blockName, properties);
  },

  /**
   * @template {keyof BlockPropertyMap} P
   * @param {BlockPermutation} permutation
   * @param {P} name
   * @param {BlockPropertyMap[P]} value
   * @returns {BlockPermutation}
   */
  withProperty(permutation, name, value) {
    return permutation.withProperty(name, value);
  },

  /**
   * @template {keyof BlockPropertyMap} P
   * @param {BlockPermutation} permutation
   * @param {P} name
   * @returns {BlockPropertyMap[P]}
   */
  getProperty(permutation, name) {
    return permutation.getProperty(name);
  },
};
"#;

/// Left-to-right text builder for one generated module.
pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn emit(&mut self, doc: &SchemaDocument) {
        self.out.push_str(PROLOGUE);

        // property aliases
        for property in &doc.properties {
            let ty = render_property_type(property);
            self.out.push_str(&format!(" * @typedef {{ {ty} }} {}\n", property.name));
        }

        // BlockPropertyMap
        self.out.push_str(PROPERTY_MAP_OPEN);
        for property in &doc.properties {
            let name = &property.name;
            self.out.push_str(&format!(" {name}: {name}, "));
        }

        // BlockPropertiesMap
        self.out.push_str(PROPERTIES_MAP_OPEN);
        for block in &doc.blocks {
            let ty = render_block_properties_type(block);
            self.out.push_str(&format!(" \"{}\": {ty},", block.name));
        }

        self.out.push_str(EPILOGUE);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

pub fn generate_module(doc: &SchemaDocument) -> String {
    let mut cg = Codegen::new();
    cg.emit(doc);
    cg.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BlockDefinition, Literal, PropertyDefinition, PropertyKind};

    fn redstone_lamp() -> SchemaDocument {
        SchemaDocument {
            properties: vec![PropertyDefinition {
                name: "lit".into(),
                kind: PropertyKind::Boolean,
                domain: vec![],
            }],
            blocks: vec![BlockDefinition {
                name: "minecraft:redstone_lamp".into(),
                property_names: vec!["lit".into()],
            }],
        }
    }

    fn mixed() -> SchemaDocument {
        SchemaDocument {
            properties: vec![
                PropertyDefinition {
                    name: "age".into(),
                    kind: PropertyKind::Integer,
                    domain: vec![Literal::Number(0.into()), Literal::Number(1.into())],
                },
                PropertyDefinition {
                    name: "color".into(),
                    kind: PropertyKind::String,
                    domain: vec![Literal::Text("red".into()), Literal::Text("blue".into())],
                },
            ],
            blocks: vec![
                BlockDefinition { name: "minecraft:stone".into(), property_names: vec![] },
                BlockDefinition {
                    name: "minecraft:wool".into(),
                    property_names: vec!["color".into(), "age".into()],
                },
            ],
        }
    }

    #[test]
    fn redstone_lamp_module_contains_all_declarations() {
        let text = generate_module(&redstone_lamp());
        assert!(text.contains("@typedef { boolean } lit"));
        assert!(text.contains("lit: lit,"));
        assert!(text.contains("\"minecraft:redstone_lamp\": { lit?: lit },"));
    }

    #[test]
    fn body_between_prologue_and_epilogue_is_exact() {
        let text = generate_module(&mixed());
        assert!(text.starts_with(PROLOGUE));
        assert!(text.ends_with(EPILOGUE));
        let body = &text[PROLOGUE.len()..text.len() - EPILOGUE.len()];
        assert_eq!(
            body,
            concat!(
                " * @typedef { 0 | 1 } age\n",
                " * @typedef { \"red\" | \"blue\" } color\n",
                " * \n * @typedef { { age: age,  color: color, } } BlockPropertyMap\n",
                " * \n * @typedef { {",
                " \"minecraft:stone\": undefined,",
                " \"minecraft:wool\": { color?: color, age?: age },",
            )
        );
    }

    #[test]
    fn empty_schema_still_produces_both_maps() {
        let text = generate_module(&SchemaDocument { properties: vec![], blocks: vec![] });
        assert_eq!(text, [PROLOGUE, PROPERTY_MAP_OPEN, PROPERTIES_MAP_OPEN, EPILOGUE].concat());
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_module(&mixed()), generate_module(&mixed()));
    }

    #[test]
    fn comment_block_closes_before_export() {
        let text = generate_module(&redstone_lamp());
        let close = text.find(" */\n").unwrap();
        let export = text.find("export default {").unwrap();
        assert!(close < export);
        assert_eq!(text.matches("*/").count(), 1 + 4);
    }

    #[test]
    fn wrapper_exposes_four_pass_through_operations() {
        for op in [
            "resolve(blockName, properties) {",
            "matches(permutation, blockName, properties) {",
            "withProperty(permutation, name, value) {",
            "getProperty(permutation, name) {",
        ] {
            assert!(EPILOGUE.contains(op), "missing {op}");
        }
    }
}
