//! Typed model of the `mojang-blocks.json` block module document.
//!
//! Only the two tables the generator reads are modelled: the property
//! catalog (`block_properties`) and the block → property-name association
//! (`blocks`). Everything else in the document is ignored by serde.
use std::fmt;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::error::Result;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid")
});

const COMMENT_TERMINATOR: &str = "*/";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchemaDocument {
    #[serde(rename = "block_properties")]
    pub properties: Vec<PropertyDefinition>,
    pub blocks: Vec<BlockDefinition>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(rename = "values", default)]
    pub domain: Vec<Literal>, // not enumerated for booleans
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum PropertyKind {
    #[serde(rename = "int")]
    Integer,
    #[serde(rename = "bool")]
    Boolean,
    #[serde(rename = "string")]
    String,
}

/// One legal value of a property, printed exactly as it appears upstream.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Literal {
    Number(serde_json::Number),
    Boolean(bool),
    Text(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BlockDefinition {
    pub name: String, // namespaced, e.g. `minecraft:stone`
    #[serde(rename = "properties")]
    pub property_names: Vec<String>,
}

/// Findings that do not stop generation but will likely produce a type
/// file the JS tooling rejects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaWarning {
    #[error("property name `{0}` is not a valid identifier")]
    NonIdentifierProperty(String),
    #[error("property `{0}` is declared more than once")]
    DuplicateProperty(String),
    #[error("property `{0}` has an empty value domain")]
    EmptyDomain(String),
    #[error("block `{block}` references unknown property `{property}`")]
    UnknownProperty { block: String, property: String },
    #[error("`{0}` contains a quote or comment terminator and is emitted unescaped")]
    Unescaped(String),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SchemaDocument {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        crate::path_de::decode_with_path(bytes)
    }

    pub fn lint(&self) -> Vec<SchemaWarning> {
        let mut warnings = Vec::new();
        let mut seen = IndexMap::<&str, &PropertyDefinition>::new();

        for property in &self.properties {
            if seen.insert(property.name.as_str(), property).is_some() {
                warnings.push(SchemaWarning::DuplicateProperty(property.name.clone()));
            }
            if !IDENTIFIER.is_match(&property.name) {
                warnings.push(SchemaWarning::NonIdentifierProperty(property.name.clone()));
            }
            if property.kind != PropertyKind::Boolean && property.domain.is_empty() {
                warnings.push(SchemaWarning::EmptyDomain(property.name.clone()));
            }
            for value in &property.domain {
                if let Literal::Text(text) = value {
                    if is_unsafe_text(text) {
                        warnings.push(SchemaWarning::Unescaped(text.clone()));
                    }
                }
            }
        }

        for block in &self.blocks {
            if is_unsafe_text(&block.name) {
                warnings.push(SchemaWarning::Unescaped(block.name.clone()));
            }
            for property in &block.property_names {
                if !seen.contains_key(property.as_str()) {
                    warnings.push(SchemaWarning::UnknownProperty {
                        block: block.name.clone(),
                        property: property.clone(),
                    });
                }
            }
        }

        warnings
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

fn is_unsafe_text(s: &str) -> bool {
    s.contains('"') || s.contains(COMMENT_TERMINATOR)
}

// ------------------------------- Tests ------------------------------------ //
