//! Trait definition for the host application boundary.
//!
//! The host owns persistence and cross-cutting reconciliation (applied
//! regions, project files); the panel core calls back into it after every
//! committed mutation and for the operations it deliberately does not
//! commit itself (rename, delete).

use crate::error::ValidationError;
use crate::model::Tag;

/// Notification sink implemented by the host application.
///
/// All methods default to no-ops so hosts implement only what they consume.
/// The two `handles_*` capability flags feed the click state machine: a
/// modifier click is only forwarded when the host declares a handler for it.
pub trait TagPanelHost {
    /// Called with the full new sequence after every committed local
    /// mutation (add, reorder, recolor, in-place update, classification).
    fn on_change(&mut self, _tags: &[Tag]) {}

    /// Called instead of committing a name change locally. The host
    /// propagates the rename to applied regions before feeding an updated
    /// tag list back to the panel.
    fn on_tag_renamed(&mut self, _old: &Tag, _new: &Tag) {}

    /// Called instead of deleting locally; the host reconciles region data
    /// and feeds an updated tag list back to the panel.
    fn on_tag_deleted(&mut self, _name: &str) {}

    /// Called after a type or format edit from the contextual menu.
    fn on_tag_changed(&mut self, _old: &Tag, _new: &Tag) {}

    /// Called with the full locked-name set after a lock toggle.
    fn on_locked_tags_change(&mut self, _names: &[String]) {}

    /// Called when a plain tag click is forwarded ("use as label" while a
    /// region is selected). Only invoked when [`Self::handles_tag_click`]
    /// returns true.
    fn on_tag_click(&mut self, _tag: &Tag) {}

    /// Called when a ctrl-click is forwarded. Only invoked when
    /// [`Self::handles_ctrl_tag_click`] returns true.
    fn on_ctrl_tag_click(&mut self, _tag: &Tag) {}

    /// Called when a mutation is rejected; the host shows a transient,
    /// non-fatal notice.
    fn on_warning(&mut self, _warning: &ValidationError) {}

    /// Whether the host consumes forwarded plain clicks.
    fn handles_tag_click(&self) -> bool {
        false
    }

    /// Whether the host consumes forwarded ctrl-clicks.
    fn handles_ctrl_tag_click(&self) -> bool {
        false
    }
}
