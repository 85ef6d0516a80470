//! Boundary types supplied by the host canvas.
//!
//! The panel never mutates these; they only feed selection rules and
//! per-tag hover info.

use serde::{Deserialize, Serialize};

/// Summary of a region currently selected on the host canvas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Identifier of the region within the host canvas
    pub id: String,
    /// Names of the tags currently applied to the region
    pub tag_names: Vec<String>,
}

impl Region {
    /// Create a region summary with the given ID and applied tag names.
    pub fn new(id: &str, tag_names: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            tag_names: tag_names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Association between a label identifier and a tag name.
///
/// Used only to derive hover info for a tag; the label list itself belongs
/// to the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelRef {
    /// Identifier of the label in the host's label list
    pub id: String,
    /// Name of the tag the label refers to
    pub tag_name: String,
}

impl LabelRef {
    /// Create a label reference.
    pub fn new(id: &str, tag_name: &str) -> Self {
        Self {
            id: id.to_string(),
            tag_name: tag_name.to_string(),
        }
    }
}
