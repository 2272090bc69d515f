use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use specimen_core::{SchemaNode, SchemaType};

/// Representative scalar for a leaf node, dispatched on type plus format with
/// a fallback on type alone. Unrecognized types render a visible sentinel
/// instead of failing.
pub(crate) fn primitive(schema: &SchemaNode, schema_type: &SchemaType) -> Value {
    match (schema_type, schema.format.as_deref()) {
        (SchemaType::String, Some("email")) => json!("user@example.com"),
        (SchemaType::String, Some("date-time")) => {
            // Fresh per call; callers needing determinism must not rely on
            // date-time fields.
            json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        (SchemaType::String, _) => json!("string"),
        (SchemaType::Number, Some("float")) => json!(0.0),
        (SchemaType::Number, _) => json!(0),
        (SchemaType::Integer, _) => json!(0),
        (SchemaType::Boolean, _) => match &schema.default_value {
            Some(Value::Bool(value)) => json!(*value),
            _ => json!(true),
        },
        (SchemaType::Other(name), _) => json!(format!("Unknown Type: {name}")),
        // Composite and file nodes are dispatched by the synthesizer before
        // this table is consulted.
        (SchemaType::Object | SchemaType::Array | SchemaType::File, _) => Value::Null,
    }
}
