use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use specimen_core::{Operation, Parameter, SchemaNode, SwaggerSpec};

use crate::index::ReferenceIndex;
use crate::options::GenerateOptions;
use crate::synth::{synthesize, synthesize_for_operation};

/// Harvested examples keyed by reference (or a synthetic unknown-type key).
/// First occurrence wins; document traversal order is preserved.
pub type ExampleMap = IndexMap<String, Value>;

const UNKNOWN_TYPE_PREFIX: &str = "unknown_type_";

/// Every `(path, method, operation)` triple in document order.
fn operations(spec: &SwaggerSpec) -> impl Iterator<Item = (&str, &str, &Operation)> {
    spec.paths.iter().flat_map(|(path, methods)| {
        methods
            .iter()
            .map(move |(method, operation)| (path.as_str(), method.as_str(), operation))
    })
}

/// Dedup key for a body schema: its own reference, else its items' reference
/// (array-of-ref), else a synthetic numbered key.
fn reference_key(schema: &SchemaNode, unknown_counter: u64) -> String {
    if let Some(reference) = &schema.reference {
        reference.clone()
    } else if let Some(reference) = schema
        .items
        .as_deref()
        .and_then(|items| items.reference.clone())
    {
        reference
    } else {
        format!("{UNKNOWN_TYPE_PREFIX}{unknown_counter}")
    }
}

/// One example per response body across the whole document.
///
/// Unknown-typed responses increment the numbering counter even when
/// `include_unknown_types` leaves them out, so numbering stays stable across
/// a pass.
pub fn response_examples(spec: &SwaggerSpec, options: &GenerateOptions) -> ExampleMap {
    let index = ReferenceIndex::from_spec(spec, options);
    let mut examples = ExampleMap::new();
    let mut unknown_counter = 0_u64;

    for (_path, _method, operation) in operations(spec) {
        for response in operation.responses.values() {
            let Some(schema) = &response.schema else {
                continue;
            };
            let key = reference_key(schema, unknown_counter);
            if examples.contains_key(&key) {
                continue;
            }
            if key.starts_with(UNKNOWN_TYPE_PREFIX) {
                unknown_counter += 1;
                if !options.include_unknown_types {
                    continue;
                }
            }
            if let Some(example) = synthesize(schema, &index, options) {
                examples.insert(key, example);
            }
        }
    }

    examples
}

/// One example per request body across the whole document, following the same
/// dedup and numbering contract as [`response_examples`].
///
/// An operation whose body schema produces nothing contributes no entry; the
/// harvest carries on regardless.
pub fn request_examples(spec: &SwaggerSpec, options: &GenerateOptions) -> ExampleMap {
    let index = ReferenceIndex::from_spec(spec, options);
    let mut examples = ExampleMap::new();
    let mut unknown_counter = 0_u64;

    for (path, method, operation) in operations(spec) {
        let Some(parameter) = body_parameter(operation) else {
            continue;
        };
        let Some(schema) = &parameter.schema else {
            continue;
        };
        let Some(example) = synthesize_for_operation(schema, &index, options, operation) else {
            if options.debug {
                debug!(path, method, schema = ?schema, "request body produced no example");
            }
            continue;
        };
        let key = reference_key(schema, unknown_counter);
        if examples.contains_key(&key) {
            continue;
        }
        if key.starts_with(UNKNOWN_TYPE_PREFIX) {
            unknown_counter += 1;
            if !options.include_unknown_types {
                continue;
            }
        }
        examples.insert(key, example);
    }

    examples
}

/// One example per named definition, keyed by reference string, independent
/// of whether any operation uses it.
pub fn definition_examples(spec: &SwaggerSpec, options: &GenerateOptions) -> ExampleMap {
    let index = ReferenceIndex::from_spec(spec, options);
    let mut examples = ExampleMap::new();

    for (reference, schema) in index.iter() {
        if let Some(example) = synthesize(schema, &index, options) {
            examples.insert(reference.to_string(), example);
        }
    }

    examples
}

/// Example for the first `in: body` parameter of a single operation, with the
/// operation's description available to the enum heuristics.
pub fn request_body_example(
    operation: &Operation,
    index: &ReferenceIndex,
    options: &GenerateOptions,
) -> Option<Value> {
    let parameter = body_parameter(operation)?;
    let schema = parameter.schema.as_ref()?;
    synthesize_for_operation(schema, index, options, operation)
}

/// First body parameter in declaration order; at most one is synthesized per
/// operation.
fn body_parameter(operation: &Operation) -> Option<&Parameter> {
    operation
        .parameters
        .iter()
        .find(|parameter| parameter.location.as_deref() == Some("body"))
}
