use std::path::Path;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Top-level snapshot of a Swagger 2.0 document.
///
/// Only the sections the synthesis engine consumes are modelled: the named
/// definitions and the path/method/operation tree. Both maps keep document
/// declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SwaggerSpec {
    /// Swagger format version (e.g. `2.0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,
    /// Document metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<SpecInfo>,
    /// Named reusable schema definitions.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, SchemaNode>,
    /// URL-path templates mapped to HTTP-method keyed operations.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, IndexMap<String, Operation>>,
}

impl SwaggerSpec {
    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a document from an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a document from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Document metadata block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SpecInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single API operation (one HTTP method under one path).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Operation {
    /// Free-text description, consulted by the enum heuristics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared parameters in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code or `default`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseObject>,
}

/// An operation parameter. Only `in: body` parameters carry a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parameter location (`body`, `query`, `path`, ...).
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
}

/// A declared response, optionally carrying a body schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResponseObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
}

/// One node of a schema tree.
///
/// Every field is optional; which ones are present decides how the node is
/// synthesized (reference, literal example, object, array, or scalar leaf).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaNode {
    /// Pointer into the document's named definitions (`#/definitions/{name}`).
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Declared type keyword, resolved to a discriminant at parse time.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub schema_type: Option<SchemaType>,
    /// Format refinement for the declared type (`email`, `date-time`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Literal example value that short-circuits generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Declared object properties in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Either a boolean switch or a schema for synthetic extra properties.
    #[serde(
        default,
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,
    /// Element schema for array-typed nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Allowed literal values, in declaration order.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Declared default value.
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, rename = "readOnly")]
    pub read_only: bool,
    #[serde(default, rename = "writeOnly")]
    pub write_only: bool,
}

impl SchemaNode {
    /// Declared type, falling back to structural inference: `properties`
    /// implies an object and `items` an array. `None` means the node is
    /// unrepresentable.
    pub fn effective_type(&self) -> Option<SchemaType> {
        if let Some(schema_type) = &self.schema_type {
            return Some(schema_type.clone());
        }
        if self.properties.is_some() {
            Some(SchemaType::Object)
        } else if self.items.is_some() {
            Some(SchemaType::Array)
        } else {
            None
        }
    }
}

/// The `additionalProperties` keyword: a plain switch or a full schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(Box<SchemaNode>),
}

/// Type discriminant for a schema node, resolved once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    File,
    /// Any unrecognized type keyword, preserved verbatim.
    Other(String),
}

impl From<String> for SchemaType {
    fn from(text: String) -> Self {
        match text.as_str() {
            "object" => Self::Object,
            "array" => Self::Array,
            "string" => Self::String,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "file" => Self::File,
            _ => Self::Other(text),
        }
    }
}

impl From<SchemaType> for String {
    fn from(value: SchemaType) -> Self {
        match value {
            SchemaType::Object => "object".to_string(),
            SchemaType::Array => "array".to_string(),
            SchemaType::String => "string".to_string(),
            SchemaType::Number => "number".to_string(),
            SchemaType::Integer => "integer".to_string(),
            SchemaType::Boolean => "boolean".to_string(),
            SchemaType::File => "file".to_string(),
            SchemaType::Other(text) => text,
        }
    }
}
