//! Data models for the tag panel.

mod region;
mod tag;

pub use region::{LabelRef, Region};
pub use tag::{Tag, TagFormat, TagType, canonical_name, names_equal};
