//! Panel event types.
//!
//! Every UI gesture the panel reacts to is represented as an event in the
//! Elm architecture style; [`crate::panel::TagPanel::handle`] is the single
//! update function.

use crate::interaction::ClickIntent;
use crate::model::{TagFormat, TagType};

/// Events that can be sent to update the tag panel state.
#[derive(Debug, Clone)]
pub enum TagPanelEvent {
    // Tag rows
    /// A tag row was clicked (with modifier/sub-target flags)
    TagClicked(ClickIntent),
    /// The contextual-menu overlay dismissed itself (outside click)
    MenuDismissed,

    // Contextual menu actions, all acting on the current selection
    /// Start renaming the selected tag in place
    RenameRequested,
    /// Delete the selected tag
    DeleteRequested,
    /// Open the color picker for the selected tag
    ColorEditRequested,
    /// Move the selected tag one position up
    MoveUpRequested,
    /// Move the selected tag one position down
    MoveDownRequested,
    /// Toggle the lock on the selected tag
    LockToggled,
    /// Assign a data type to the selected tag
    TypeSelected(TagType),
    /// Assign a format to the selected tag
    FormatSelected(TagFormat),

    // Color picker overlay
    /// A color was picked for the selected tag
    ColorPicked(String),

    // Rename input
    /// Rename input committed (enter/blur)
    RenameSubmitted(String),
    /// Rename input cancelled
    RenameCancelled,

    // Add box
    /// Add-tag box visibility toggled
    AddBoxToggled,
    /// Add-tag input committed
    AddSubmitted(String),

    // Search box
    /// Search box visibility toggled
    SearchBoxToggled,
    /// Search query text changed
    SearchChanged(String),

    /// Escape pressed while an add/search input is open
    EscapePressed,
}
