use serde::{Deserialize, Serialize};

/// Options shared by the synthesizer and the harvest functions.
///
/// Everything defaults to the excluding behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Include object properties marked `readOnly`.
    pub include_read_only: bool,
    /// Include object properties marked `writeOnly`.
    pub include_write_only: bool,
    /// Keep harvest entries whose body schema carries no reference.
    pub include_unknown_types: bool,
    /// Emit extra diagnostics while indexing and harvesting.
    pub debug: bool,
}
