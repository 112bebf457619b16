//! Data model for extracted API documentation — format-agnostic.

use indexmap::IndexMap;
use serde::Serialize;

/// Category of a documented symbol. Serialized forms match the tags the
/// JSON output uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    #[serde(rename = "fn")]
    Function,
    #[serde(rename = "def")]
    Define,
    #[serde(rename = "enum")]
    EnumValue,
    #[serde(rename = "typedef")]
    Typedef,
}

/// A single documented symbol (function, macro, enum value, or typedef).
#[derive(Debug)]
pub struct Symbol {
    pub kind: Kind,
    pub name: String,
    /// Return type for functions/typedefs, enclosing type context otherwise.
    /// May be empty.
    pub ty: String,
    /// Declared parameters, keyed by name in declaration order. A duplicate
    /// declared name overwrites the entry but keeps its original position.
    pub params: IndexMap<String, Param>,
    /// Main prose description. Never absent; empty when the source has no
    /// text anywhere. Detailed description wins over the brief one.
    pub description: String,
    /// Text of the first `kind="return"` annotation, if any.
    pub return_desc: Option<String>,
    /// Text of the first `kind="note"` annotation, if any.
    pub warning: Option<String>,
}

/// A declared parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Present only when a parameter-list entry matched the declared name.
    pub description: Option<String>,
}
