use chrono::DateTime;
use serde_json::{Value, json};

use specimen_core::{SchemaNode, SwaggerSpec};
use specimen_gen::{
    GenerateOptions, ReferenceIndex, STRING_COLLECTION_REF, synthesize, synthesize_with_spec,
};

fn node(value: Value) -> SchemaNode {
    serde_json::from_value(value).expect("schema node")
}

fn generate(value: Value) -> Option<Value> {
    synthesize(
        &node(value),
        &ReferenceIndex::default(),
        &GenerateOptions::default(),
    )
}

#[test]
fn object_with_primitive_properties() {
    let result = generate(json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "name": {"type": "string"}
        }
    }));
    assert_eq!(result, Some(json!({"id": 0, "name": "{{name}}"})));
}

#[test]
fn array_always_holds_one_element() {
    let result = generate(json!({"type": "array", "items": {"type": "string"}}));
    assert_eq!(result, Some(json!(["{{string}}"])));
}

#[test]
fn literal_example_short_circuits_generation() {
    let result = generate(json!({
        "type": "object",
        "example": {"already": "done"},
        "properties": {"ignored": {"type": "string"}}
    }));
    assert_eq!(result, Some(json!({"already": "done"})));
}

#[test]
fn read_only_properties_follow_the_option() {
    let schema = json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer", "readOnly": true},
            "name": {"type": "string"}
        }
    });

    let excluded = generate(schema.clone()).expect("value");
    assert_eq!(excluded, json!({"name": "{{name}}"}));

    let options = GenerateOptions {
        include_read_only: true,
        ..GenerateOptions::default()
    };
    let included = synthesize(&node(schema), &ReferenceIndex::default(), &options).expect("value");
    assert_eq!(included, json!({"id": 0, "name": "{{name}}"}));
}

#[test]
fn write_only_properties_follow_the_option() {
    let schema = json!({
        "type": "object",
        "properties": {"secret": {"type": "string", "writeOnly": true}}
    });

    assert_eq!(generate(schema.clone()), Some(json!({})));

    let options = GenerateOptions {
        include_write_only: true,
        ..GenerateOptions::default()
    };
    let included = synthesize(&node(schema), &ReferenceIndex::default(), &options).expect("value");
    assert_eq!(included, json!({"secret": "{{secret}}"}));
}

#[test]
fn boolean_defaults() {
    assert_eq!(generate(json!({"type": "boolean"})), Some(json!(true)));
    assert_eq!(
        generate(json!({"type": "boolean", "default": false})),
        Some(json!(false))
    );
}

#[test]
fn number_formats() {
    assert_eq!(generate(json!({"type": "number"})), Some(json!(0)));
    assert_eq!(
        generate(json!({"type": "number", "format": "float"})),
        Some(json!(0.0))
    );
    assert_eq!(generate(json!({"type": "integer"})), Some(json!(0)));
}

#[test]
fn string_formats() {
    assert_eq!(generate(json!({"type": "string"})), Some(json!("{{string}}")));
    assert_eq!(
        generate(json!({"type": "string", "format": "email"})),
        Some(json!("{{user@example.com}}"))
    );

    let generated = generate(json!({"type": "string", "format": "date-time"})).expect("value");
    let text = generated.as_str().expect("string value");
    let inner = text
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .expect("placeholder markers");
    DateTime::parse_from_rfc3339(inner).expect("rfc 3339 timestamp");
}

#[test]
fn unrecognized_format_falls_back_to_type() {
    let result = generate(json!({"type": "string", "format": "uuid"}));
    assert_eq!(result, Some(json!("{{string}}")));
}

#[test]
fn unrecognized_type_renders_sentinel() {
    let result = generate(json!({"type": "widget"}));
    assert_eq!(result, Some(json!("{{Unknown Type: widget}}")));
}

#[test]
fn generic_string_takes_the_field_name() {
    let result = generate(json!({
        "type": "object",
        "properties": {"id": {"type": "string"}}
    }));
    assert_eq!(result, Some(json!({"id": "{{id}}"})));

    // Qualified strings keep their format-specific value.
    let result = generate(json!({
        "type": "object",
        "properties": {"contact": {"type": "string", "format": "email"}}
    }));
    assert_eq!(result, Some(json!({"contact": "{{user@example.com}}"})));
}

#[test]
fn additional_properties_flag_appends_one_empty_object() {
    let result = generate(json!({
        "type": "object",
        "properties": {"name": {"type": "string"}},
        "additionalProperties": true
    }));
    assert_eq!(
        result,
        Some(json!({"name": "{{name}}", "additionalProp1": {}}))
    );
}

#[test]
fn additional_properties_schema_appends_three_copies() {
    let result = generate(json!({
        "type": "object",
        "additionalProperties": {"type": "integer"}
    }));
    assert_eq!(
        result,
        Some(json!({"additionalProp1": 0, "additionalProp2": 0, "additionalProp3": 0}))
    );
}

#[test]
fn unrepresentable_nodes_produce_nothing() {
    assert_eq!(generate(json!({"type": "file"})), None);
    assert_eq!(generate(json!({"description": "no type at all"})), None);
    assert_eq!(generate(json!({"$ref": "#/definitions/Missing"})), None);
}

#[test]
fn type_inference_from_structure() {
    let result = generate(json!({"properties": {"id": {"type": "integer"}}}));
    assert_eq!(result, Some(json!({"id": 0})));

    let result = generate(json!({"items": {"type": "integer"}}));
    assert_eq!(result, Some(json!([0])));
}

#[test]
fn well_known_string_collection_resolves_without_a_definition() {
    let result = generate(json!({"$ref": STRING_COLLECTION_REF}));
    assert_eq!(result, Some(json!(["{{string}}"])));
}

#[test]
fn references_resolve_through_the_document() {
    let spec = SwaggerSpec::from_value(json!({
        "definitions": {
            "Pet": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                }
            }
        }
    }))
    .expect("document");

    let schema = node(json!({"$ref": "#/definitions/Pet"}));
    let result = synthesize_with_spec(&schema, &spec, &GenerateOptions::default());
    assert_eq!(result, Some(json!({"id": 0, "tags": ["{{tags}}"]})));
}

#[test]
fn enum_under_referenced_parent_matches_reference_name() {
    let spec = SwaggerSpec::from_value(json!({
        "definitions": {
            "DogBreed": {
                "type": "object",
                "properties": {
                    "breed": {"type": "string", "enum": ["Cat", "Dog"]}
                }
            }
        }
    }))
    .expect("document");

    let schema = node(json!({"$ref": "#/definitions/DogBreed"}));
    let result = synthesize_with_spec(&schema, &spec, &GenerateOptions::default());
    assert_eq!(result, Some(json!({"breed": "dog"})));
}

#[test]
fn enum_without_context_takes_first_member_lower_cased() {
    let result = generate(json!({"type": "string", "enum": ["Cat", "Dog"]}));
    assert_eq!(result, Some(json!("cat")));
}

#[test]
fn enum_default_wins_verbatim() {
    let result = generate(json!({"type": "string", "enum": ["Cat", "Dog"], "default": "Dog"}));
    assert_eq!(result, Some(json!("Dog")));
}

#[test]
fn empty_enum_falls_back_to_primitive() {
    let result = generate(json!({"type": "string", "enum": []}));
    assert_eq!(result, Some(json!("{{string}}")));
}

#[test]
fn cyclic_references_terminate() {
    let spec = SwaggerSpec::from_value(json!({
        "definitions": {
            "Node": {
                "type": "object",
                "properties": {
                    "value": {"type": "integer"},
                    "next": {"$ref": "#/definitions/Node"}
                }
            }
        }
    }))
    .expect("document");

    let schema = node(json!({"$ref": "#/definitions/Node"}));
    let result = synthesize_with_spec(&schema, &spec, &GenerateOptions::default())
        .expect("truncated value");
    assert!(result.is_object());
    assert_eq!(result["value"], json!(0));
}
