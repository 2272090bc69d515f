//! Example-payload synthesis for Swagger 2.0 documents.
//!
//! This crate turns schema nodes into concrete example values: references are
//! resolved through a per-document index, objects and arrays recurse, and
//! leaves fall back to primitive defaults or contextual enum heuristics. The
//! harvest functions walk a whole document and collect one example per
//! request/response body, deduplicated by reference.

mod enums;
mod primitives;

pub mod harvest;
pub mod index;
pub mod options;
pub mod synth;

pub use harvest::{
    ExampleMap, definition_examples, request_body_example, request_examples, response_examples,
};
pub use index::{ReferenceIndex, STRING_COLLECTION_REF};
pub use options::GenerateOptions;
pub use synth::{synthesize, synthesize_with_spec};
