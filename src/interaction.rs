//! Click-intent state machine for the tag panel.
//!
//! A tag row answers to several overlapping click gestures: plain click,
//! ctrl-click, alt-click, a click on its dropdown chevron, and a click on
//! its color swatch. This module disambiguates them into mutually exclusive
//! operation modes with a pure transition function, so the behavior is unit
//! testable without any display surface.

use crate::model::Tag;

/// The overlay editing affordance currently active for the selected tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// No overlay active
    #[default]
    None,
    /// Color picker open for the selected tag
    ColorPicker,
    /// Contextual menu open for the selected tag
    ContextualMenu,
    /// In-place rename input open for the selected tag
    Rename,
}

/// Which tag is selected and which overlay operation is active.
///
/// Invariant: an active mode always has a selected tag. The constructors
/// and mutators below are the only way to change the fields, so the
/// invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<Tag>,
    mode: OperationMode,
}

impl SelectionState {
    /// No selection, no active mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected tag, if any.
    pub fn selected(&self) -> Option<&Tag> {
        self.selected.as_ref()
    }

    /// The active operation mode.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Whether the tag with the given name is the current selection.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|tag| tag.is_named(name))
    }

    /// Drop selection and mode.
    pub fn clear(&mut self) {
        self.selected = None;
        self.mode = OperationMode::None;
    }

    /// Close the active overlay without touching the selection. Triggered
    /// by the overlay widget itself (e.g. an outside-click on the menu);
    /// a no-op when nothing is open.
    pub fn dismiss_overlay(&mut self) {
        self.mode = OperationMode::None;
    }

    /// Re-resolve the selection against a new externally supplied tag list.
    ///
    /// The selected tag may have been renamed or removed elsewhere; if no
    /// tag matches by name, the selection (and any mode) is gone.
    pub fn resolve_against(&mut self, tags: &[Tag]) {
        let Some(current) = &self.selected else {
            return;
        };
        match tags.iter().find(|tag| tag.is_named(&current.name)) {
            Some(tag) => self.selected = Some(tag.clone()),
            None => self.clear(),
        }
    }

    /// Enter rename mode for the current selection (contextual-menu path).
    /// No-op without a selection.
    pub fn begin_rename(&mut self) {
        if self.selected.is_some() {
            self.mode = OperationMode::Rename;
        }
    }

    /// Open the color picker for the current selection (contextual-menu
    /// path). No-op without a selection.
    pub fn begin_color_edit(&mut self) {
        if self.selected.is_some() {
            self.mode = OperationMode::ColorPicker;
        }
    }

    fn with_mode(tag: Tag, mode: OperationMode) -> Self {
        Self {
            selected: Some(tag),
            mode,
        }
    }
}

/// A raw click on a tag row, with its modifier and sub-target flags.
#[derive(Debug, Clone)]
pub struct ClickIntent {
    /// The tag that was clicked
    pub tag: Tag,
    /// Ctrl key held
    pub ctrl: bool,
    /// Alt key held
    pub alt: bool,
    /// The click landed on the row's dropdown chevron
    pub dropdown: bool,
    /// The click landed on the row's color swatch
    pub color_swatch: bool,
}

impl ClickIntent {
    /// A plain click on a tag, no modifiers, no sub-target.
    pub fn plain(tag: Tag) -> Self {
        Self {
            tag,
            ctrl: false,
            alt: false,
            dropdown: false,
            color_swatch: false,
        }
    }
}

/// Ambient context the transition function needs from the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickContext {
    /// Whether any region is currently selected on the host canvas
    pub region_selected: bool,
    /// Whether the host consumes forwarded plain clicks
    pub click_forwarding: bool,
    /// Whether the host consumes forwarded ctrl-clicks
    pub ctrl_click_forwarding: bool,
}

/// A click the panel does not handle itself and forwards to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// Plain click while a region is selected ("apply this tag")
    ForwardClick(Tag),
    /// Ctrl-click, host-defined meaning
    ForwardCtrlClick(Tag),
}

/// Decide the next selection state for a click, plus any intent to forward.
///
/// The gesture branches are checked in priority order: ctrl, alt, dropdown,
/// color swatch, plain.
pub fn transition(
    state: &SelectionState,
    intent: &ClickIntent,
    ctx: &ClickContext,
) -> (SelectionState, Option<ClickEffect>) {
    let target = &intent.tag;

    if intent.ctrl && ctx.ctrl_click_forwarding {
        return (
            state.clone(),
            Some(ClickEffect::ForwardCtrlClick(target.clone())),
        );
    }

    if intent.alt {
        return (
            SelectionState::with_mode(target.clone(), OperationMode::Rename),
            None,
        );
    }

    if intent.dropdown {
        // Second dropdown click on the same tag closes the menu.
        if state.mode == OperationMode::ContextualMenu && state.is_selected(&target.name) {
            let mut next = state.clone();
            next.dismiss_overlay();
            return (next, None);
        }
        return (
            SelectionState::with_mode(target.clone(), OperationMode::ContextualMenu),
            None,
        );
    }

    if intent.color_swatch {
        // An open picker closes on any swatch click; the prior selection
        // stays as it was.
        if state.mode == OperationMode::ColorPicker {
            let mut next = state.clone();
            next.dismiss_overlay();
            return (next, None);
        }
        return (
            SelectionState::with_mode(target.clone(), OperationMode::ColorPicker),
            None,
        );
    }

    let already_selected = state.is_selected(&target.name);

    // While a region is selected on the canvas, a plain click means "use
    // this tag as a label": forward it and never deselect.
    if ctx.region_selected && ctx.click_forwarding {
        return (
            select(state, target),
            Some(ClickEffect::ForwardClick(target.clone())),
        );
    }

    if already_selected && state.mode == OperationMode::None {
        return (SelectionState::new(), None);
    }

    (select(state, target), None)
}

/// Select `target`, preserving the mode only when it was already acting on
/// that same tag.
fn select(state: &SelectionState, target: &Tag) -> SelectionState {
    let mode = if state.is_selected(&target.name) {
        state.mode
    } else {
        OperationMode::None
    };
    SelectionState::with_mode(target.clone(), mode)
}
