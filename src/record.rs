use serde::{Deserialize, Serialize};

/// The documentation record assembled for one source file.
///
/// Core fields stay `None` until their tag block matches; the collection
/// fields start empty and grow in source order. A record with every field
/// unset is still a valid outcome (the class-core block failed to match
/// but the file did contain `@class`).
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Dotted class identifier, e.g. `Foo.Bar`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dotted parent identifier from the `@extends` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Free text between the parent name and `@example`, link-rewritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Verbatim usage example following `@example`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionEntry>,
}

/// One `@prop {Type} name [default] description` declaration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Type token as written in the source, e.g. `String`, `Number`.
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    /// Raw default literal as written, e.g. `""`, `0`, `null`.
    pub default: String,
    pub description: String,
}

/// One `@function` declaration with its extracted `@param` entries.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FunctionEntry {
    pub name: String,
    /// Body text with all param fragments removed, link-rewritten.
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamEntry>,
}

/// One `@param {Type} name description` occurrence inside a function block.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ParamEntry {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub description: String,
}
