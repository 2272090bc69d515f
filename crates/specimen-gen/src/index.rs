use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::debug;

use specimen_core::{SchemaNode, SchemaType, SwaggerSpec};

use crate::options::GenerateOptions;

/// Well-known wrapper reference that some generators emit without a matching
/// definitions entry. Resolves to an array of strings.
pub const STRING_COLLECTION_REF: &str = "#/definitions/Collection«string»";

static STRING_COLLECTION: LazyLock<SchemaNode> = LazyLock::new(|| SchemaNode {
    schema_type: Some(SchemaType::Array),
    items: Some(Box::new(SchemaNode {
        schema_type: Some(SchemaType::String),
        ..SchemaNode::default()
    })),
    ..SchemaNode::default()
});

/// Lookup table from `#/definitions/{name}` references to schema nodes.
///
/// Built once per document, read-only afterwards, and safe to reuse across
/// every synthesis call of one harvesting pass.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: IndexMap<String, SchemaNode>,
}

impl ReferenceIndex {
    /// Index every entry of the document's definitions section, in
    /// declaration order. A document without definitions yields an empty
    /// index, not an error.
    pub fn from_spec(spec: &SwaggerSpec, options: &GenerateOptions) -> Self {
        if options.debug {
            let title = spec
                .info
                .as_ref()
                .and_then(|info| info.title.as_deref())
                .unwrap_or("<untitled>");
            debug!(title, "building reference index");
        }

        let mut entries = IndexMap::with_capacity(spec.definitions.len());
        for (name, schema) in &spec.definitions {
            let reference = format!("#/definitions/{name}");
            if options.debug {
                debug!(%reference, schema = ?schema, "indexed definition");
            }
            entries.insert(reference, schema.clone());
        }

        if options.debug {
            if entries.is_empty() {
                debug!("document contains no schema definitions");
            } else {
                debug!(count = entries.len(), "indexed schema definitions");
            }
        }

        Self { entries }
    }

    /// Look up a reference. The well-known string-collection wrapper is
    /// answered even when the document does not define it.
    pub fn resolve(&self, reference: &str) -> Option<&SchemaNode> {
        if reference == STRING_COLLECTION_REF {
            return Some(&*STRING_COLLECTION);
        }
        self.entries.get(reference)
    }

    /// Indexed entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
