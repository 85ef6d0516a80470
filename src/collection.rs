//! Ordered tag collection with validation and host notification.
//!
//! The collection exclusively owns the tag sequence; order is display and
//! application order. Mutations validate first, then mutate, then notify
//! the host synchronously. Rename and delete are the deliberate exception:
//! they only notify, because the host must reconcile applied regions before
//! the change commits (the new list flows back in as a later update).

use crate::constants::MAX_TAG_NAME_LEN;
use crate::error::ValidationError;
use crate::host::TagPanelHost;
use crate::model::{Tag, TagFormat, TagType, names_equal};

/// The ordered set of tags being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCollection {
    tags: Vec<Tag>,
}

impl TagCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from an externally supplied sequence.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// The tags in display order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Look up a tag by canonical name equality.
    pub fn find(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.is_named(name))
    }

    /// Position of a tag by canonical name equality.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|tag| tag.is_named(name))
    }

    /// Replace the whole sequence from a host update. Does not notify;
    /// the host already knows.
    pub fn replace_all(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    /// Validate a candidate name as `add` would, optionally ignoring one
    /// existing tag (for renames).
    fn validate_name(&self, name: &str, exclude: Option<&str>) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len >= MAX_TAG_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                len,
                max: MAX_TAG_NAME_LEN,
            });
        }
        let duplicate = self.tags.iter().any(|tag| {
            tag.is_named(name) && !exclude.is_some_and(|ex| tag.is_named(ex))
        });
        if duplicate {
            return Err(ValidationError::duplicate_name(trimmed));
        }
        Ok(())
    }

    /// Add a tag at the end of the sequence.
    pub fn add(
        &mut self,
        tag: Tag,
        host: &mut dyn TagPanelHost,
    ) -> Result<(), ValidationError> {
        self.validate_name(&tag.name, None)?;
        log::info!("Added tag '{}'", tag.name);
        self.tags.push(tag);
        host.on_change(&self.tags);
        Ok(())
    }

    /// Update a tag's name and/or color.
    ///
    /// No-op when both are unchanged (name compared case-insensitively).
    /// A name change is delegated to the host via `on_tag_renamed` and not
    /// committed here; anything else replaces the tag in place, preserving
    /// its position.
    pub fn update(
        &mut self,
        old: &Tag,
        new: Tag,
        host: &mut dyn TagPanelHost,
    ) -> Result<(), ValidationError> {
        let name_unchanged = names_equal(&old.name, &new.name);
        if name_unchanged && old.color == new.color {
            return Ok(());
        }
        self.validate_name(&new.name, Some(&old.name))?;
        if !name_unchanged {
            log::info!("Delegating rename '{}' -> '{}'", old.name, new.name);
            host.on_tag_renamed(old, &new);
            return Ok(());
        }
        if let Some(idx) = self.index_of(&old.name) {
            log::info!("Updated tag '{}'", new.name);
            self.tags[idx] = new;
            host.on_change(&self.tags);
        }
        Ok(())
    }

    /// Delete a tag. Delegated entirely to the host: downstream region data
    /// must be reconciled before the tag disappears from the sequence.
    pub fn delete(&mut self, tag: &Tag, host: &mut dyn TagPanelHost) {
        log::info!("Delegating delete of tag '{}'", tag.name);
        host.on_tag_deleted(&tag.name);
    }

    /// Move a tag by `displacement` positions. Out-of-bounds targets and
    /// unknown tags are silent no-ops.
    pub fn reorder(&mut self, tag: &Tag, displacement: isize, host: &mut dyn TagPanelHost) {
        let Some(idx) = self.index_of(&tag.name) else {
            return;
        };
        let target = idx as isize + displacement;
        if target < 0 || target >= self.tags.len() as isize {
            return;
        }
        let moved = self.tags.remove(idx);
        self.tags.insert(target as usize, moved);
        log::info!("Moved tag '{}' to position {}", tag.name, target);
        host.on_change(&self.tags);
    }

    /// Replace the color of the tag matching `tag` by name.
    pub fn recolor(&mut self, tag: &Tag, color: &str, host: &mut dyn TagPanelHost) {
        let Some(idx) = self.index_of(&tag.name) else {
            return;
        };
        self.tags[idx].color = color.to_string();
        log::info!("Recolored tag '{}' to {}", tag.name, color);
        host.on_change(&self.tags);
    }

    /// Change a tag's type from the contextual menu.
    ///
    /// The format resets to `NotSpecified` unless the supplied format is
    /// already valid for the new type.
    pub fn set_type(
        &mut self,
        tag: &Tag,
        new_type: TagType,
        format: Option<TagFormat>,
        host: &mut dyn TagPanelHost,
    ) {
        let Some(idx) = self.index_of(&tag.name) else {
            return;
        };
        let new_format = format
            .filter(|f| new_type.valid_formats().contains(f))
            .unwrap_or(TagFormat::NotSpecified);
        let old = self.tags[idx].clone();
        if old.tag_type == new_type && old.format == new_format {
            return;
        }
        self.tags[idx].tag_type = new_type;
        self.tags[idx].format = new_format;
        log::info!("Tag '{}' type set to {}", tag.name, new_type.name());
        let new = self.tags[idx].clone();
        host.on_tag_changed(&old, &new);
        host.on_change(&self.tags);
    }

    /// Change a tag's format from the contextual menu. Formats not valid
    /// for the tag's current type are ignored (stale menu selection).
    pub fn set_format(&mut self, tag: &Tag, format: TagFormat, host: &mut dyn TagPanelHost) {
        let Some(idx) = self.index_of(&tag.name) else {
            return;
        };
        if !self.tags[idx].tag_type.valid_formats().contains(&format) {
            return;
        }
        let old = self.tags[idx].clone();
        if old.format == format {
            return;
        }
        self.tags[idx].format = format;
        log::info!("Tag '{}' format set to {}", tag.name, format.name());
        let new = self.tags[idx].clone();
        host.on_tag_changed(&old, &new);
        host.on_change(&self.tags);
    }
}
