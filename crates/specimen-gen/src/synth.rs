use serde_json::{Map, Value};
use tracing::warn;

use specimen_core::{AdditionalProperties, Operation, SchemaNode, SchemaType, SwaggerSpec};

use crate::enums::resolve_enum;
use crate::index::ReferenceIndex;
use crate::options::GenerateOptions;
use crate::primitives::primitive;

/// Maximum recursion depth before a reference chain is treated as cyclic and
/// truncated.
const MAX_DEPTH: usize = 64;

/// A schema node paired with the reference it was resolved through, if any.
/// Shared schema data is never mutated; lineage travels alongside instead.
#[derive(Clone, Copy)]
struct Resolved<'a> {
    node: &'a SchemaNode,
    origin: Option<&'a str>,
}

/// Context threaded through one synthesis call chain.
#[derive(Clone, Copy, Default)]
struct Context<'a> {
    /// Name of the property being generated, used as a readable fallback for
    /// generic string leaves.
    field_name: Option<&'a str>,
    /// Immediately enclosing schema, consulted by the enum heuristics.
    parent: Option<Resolved<'a>>,
    /// Enclosing API operation, consulted by the enum heuristics.
    operation: Option<&'a Operation>,
    depth: usize,
}

/// Synthesize one concrete example value from a schema node.
///
/// Returns `None` when the node is unrepresentable: no type declared or
/// inferable, a `file` node, or an unresolvable reference. Malformed input
/// degrades to `None` or sentinel strings, never an error.
pub fn synthesize(
    schema: &SchemaNode,
    index: &ReferenceIndex,
    options: &GenerateOptions,
) -> Option<Value> {
    synth_node(schema, index, options, Context::default())
}

/// Like [`synthesize`], building the reference index from the full document.
pub fn synthesize_with_spec(
    schema: &SchemaNode,
    spec: &SwaggerSpec,
    options: &GenerateOptions,
) -> Option<Value> {
    let index = ReferenceIndex::from_spec(spec, options);
    synthesize(schema, &index, options)
}

/// Synthesis with the enclosing operation as enum-heuristic context. Used for
/// request bodies, where the operation description is a useful hint.
pub(crate) fn synthesize_for_operation(
    schema: &SchemaNode,
    index: &ReferenceIndex,
    options: &GenerateOptions,
    operation: &Operation,
) -> Option<Value> {
    synth_node(
        schema,
        index,
        options,
        Context {
            operation: Some(operation),
            ..Context::default()
        },
    )
}

fn synth_node<'a>(
    schema: &'a SchemaNode,
    index: &'a ReferenceIndex,
    options: &GenerateOptions,
    ctx: Context<'a>,
) -> Option<Value> {
    if ctx.depth > MAX_DEPTH {
        warn!(
            depth = ctx.depth,
            "schema recursion truncated, reference chain is likely cyclic"
        );
        return None;
    }

    // A reference missing from the index surfaces as an absent value, not an
    // error.
    let resolved = match &schema.reference {
        Some(reference) => Resolved {
            node: index.resolve(reference)?,
            origin: Some(reference.as_str()),
        },
        None => Resolved {
            node: schema,
            origin: None,
        },
    };
    let node = resolved.node;

    // A literal example short-circuits all generation, composites included.
    if let Some(example) = &node.example {
        return Some(example.clone());
    }

    let schema_type = node.effective_type()?;

    match schema_type {
        SchemaType::File => None,
        SchemaType::Object => Some(synth_object(resolved, index, options, ctx)),
        SchemaType::Array => Some(synth_array(resolved, index, options, ctx)),
        leaf => Some(synth_scalar(resolved, &leaf, ctx)),
    }
}

fn synth_object<'a>(
    resolved: Resolved<'a>,
    index: &'a ReferenceIndex,
    options: &GenerateOptions,
    ctx: Context<'a>,
) -> Value {
    let node = resolved.node;
    let mut object = Map::new();

    if let Some(properties) = &node.properties {
        for (name, property) in properties {
            if property.read_only && !options.include_read_only {
                continue;
            }
            if property.write_only && !options.include_write_only {
                continue;
            }
            let value = synth_node(
                property,
                index,
                options,
                Context {
                    field_name: Some(name),
                    parent: Some(resolved),
                    operation: ctx.operation,
                    depth: ctx.depth + 1,
                },
            );
            // Properties that synthesize to nothing are omitted.
            if let Some(value) = value {
                object.insert(name.clone(), value);
            }
        }
    }

    match &node.additional_properties {
        Some(AdditionalProperties::Flag(true)) => {
            object.insert("additionalProp1".to_string(), Value::Object(Map::new()));
        }
        Some(AdditionalProperties::Schema(additional)) => {
            // One synthesized value shared by three synthetic properties.
            let value = synth_node(
                additional,
                index,
                options,
                Context {
                    parent: Some(resolved),
                    depth: ctx.depth + 1,
                    ..ctx
                },
            );
            if let Some(value) = value {
                for n in 1..=3 {
                    object.insert(format!("additionalProp{n}"), value.clone());
                }
            }
        }
        Some(AdditionalProperties::Flag(false)) | None => {}
    }

    Value::Object(object)
}

fn synth_array<'a>(
    resolved: Resolved<'a>,
    index: &'a ReferenceIndex,
    options: &GenerateOptions,
    ctx: Context<'a>,
) -> Value {
    // Arrays always hold exactly one representative element.
    let element = resolved.node.items.as_deref().and_then(|items| {
        synth_node(
            items,
            index,
            options,
            Context {
                parent: Some(resolved),
                depth: ctx.depth + 1,
                ..ctx
            },
        )
    });
    Value::Array(vec![element.unwrap_or(Value::Null)])
}

fn synth_scalar(resolved: Resolved<'_>, schema_type: &SchemaType, ctx: Context<'_>) -> Value {
    let node = resolved.node;

    if let Some(values) = &node.enum_values {
        let parent_reference = ctx.parent.and_then(|parent| parent.origin);
        let description = ctx
            .operation
            .and_then(|operation| operation.description.as_deref());
        if let Some(choice) = resolve_enum(
            values,
            node.default_value.as_ref(),
            parent_reference,
            description,
        ) {
            // The resolver's choice is final: no placeholder wrapping, no
            // field-name substitution.
            return choice;
        }
        // An empty enum list falls through to the primitive defaults.
    }

    let mut value = primitive(node, schema_type);

    // A generic "string" reads better as the property's own name.
    if let (Some(field_name), Some("string")) = (ctx.field_name, value.as_str()) {
        value = Value::String(field_name.to_string());
    }

    // Generated text is marked with template placeholders; numbers and
    // booleans stay bare.
    if let Value::String(text) = &value {
        value = Value::String(format!("{{{{{text}}}}}"));
    }

    value
}
