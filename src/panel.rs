//! The tag panel controller.
//!
//! `TagPanel` owns the collection, lock set, selection state, search query,
//! and transient input state, and routes every UI event through a single
//! synchronous update function. Each event runs to completion (validate,
//! mutate, notify) before the next one is processed; host notifications are
//! ordered callbacks, and any tag list the host feeds back arrives as a
//! separate `set_tags` cycle, never re-entrantly.

use crate::collection::TagCollection;
use crate::error::ValidationError;
use crate::host::TagPanelHost;
use crate::interaction::{ClickContext, ClickEffect, SelectionState, transition};
use crate::locks::LockSet;
use crate::message::TagPanelEvent;
use crate::model::{LabelRef, Region, Tag, names_equal};
use crate::palette::Palette;
use crate::search;

/// Host-level display flags for the panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelOptions {
    /// Keep the add-tag box visible at all times
    pub always_show_add_box: bool,
    /// Keep the search box visible at all times
    pub always_show_search_box: bool,
}

/// The editing controller behind the tag-management panel.
#[derive(Debug, Clone)]
pub struct TagPanel {
    collection: TagCollection,
    locks: LockSet,
    selection: SelectionState,
    palette: Palette,
    options: PanelOptions,
    query: String,
    regions: Vec<Region>,
    labels: Vec<LabelRef>,
    add_box_open: bool,
    search_box_open: bool,
}

impl Default for TagPanel {
    fn default() -> Self {
        Self::new(Palette::default(), PanelOptions::default())
    }
}

impl TagPanel {
    /// Create an empty panel with the given palette and options.
    pub fn new(palette: Palette, options: PanelOptions) -> Self {
        Self {
            collection: TagCollection::new(),
            locks: LockSet::new(),
            selection: SelectionState::new(),
            palette,
            options,
            query: String::new(),
            regions: Vec::new(),
            labels: Vec::new(),
            add_box_open: false,
            search_box_open: false,
        }
    }

    // ------------------------------------------------------------------
    // Host prop updates
    // ------------------------------------------------------------------

    /// Replace the tag sequence from the host. The selection is re-resolved
    /// by name against the new list and dropped when its tag is gone.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.collection.replace_all(tags);
        self.selection.resolve_against(self.collection.tags());
    }

    /// Replace the set of regions selected on the host canvas.
    ///
    /// Region selection and tag-edit selection are mutually exclusive focus
    /// contexts: any change that leaves the region set non-empty clears the
    /// tag selection.
    pub fn set_selected_regions(&mut self, regions: Vec<Region>) {
        if regions != self.regions && !regions.is_empty() {
            self.selection.clear();
        }
        self.regions = regions;
    }

    /// Replace the host's label list (hover info only; never mutated here).
    pub fn set_labels(&mut self, labels: Vec<LabelRef>) {
        self.labels = labels;
    }

    /// Replace the locked-name set from the host.
    pub fn set_locked_tags(&mut self, names: Vec<String>) {
        self.locks = LockSet::from_names(names);
    }

    // ------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------

    /// The full tag sequence in display order.
    pub fn tags(&self) -> &[Tag] {
        self.collection.tags()
    }

    /// The tags matching the current search query, in display order.
    pub fn visible_tags(&self) -> Vec<Tag> {
        search::visible(self.collection.tags(), &self.query)
    }

    /// Current selection and operation mode.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the given tag name is locked.
    pub fn is_locked(&self, name: &str) -> bool {
        self.locks.is_locked(name)
    }

    /// The locked names, in toggle order.
    pub fn locked_names(&self) -> &[String] {
        self.locks.names()
    }

    /// Labels referring to the given tag, for hover info.
    pub fn labels_for(&self, tag_name: &str) -> Vec<&LabelRef> {
        self.labels
            .iter()
            .filter(|label| names_equal(&label.tag_name, tag_name))
            .collect()
    }

    /// Whether the tag is applied to every currently selected region.
    pub fn is_applied_to_selection(&self, tag_name: &str) -> bool {
        !self.regions.is_empty()
            && self.regions.iter().all(|region| {
                region
                    .tag_names
                    .iter()
                    .any(|name| names_equal(name, tag_name))
            })
    }

    /// Whether the add-tag box should be shown.
    pub fn add_box_visible(&self) -> bool {
        self.options.always_show_add_box || self.add_box_open
    }

    /// Whether the search box should be shown.
    pub fn search_box_visible(&self) -> bool {
        self.options.always_show_search_box || self.search_box_open
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    /// Route a panel event. Runs synchronously to completion; rejected
    /// mutations surface through [`TagPanelHost::on_warning`] and leave all
    /// state unchanged.
    pub fn handle(&mut self, event: TagPanelEvent, host: &mut dyn TagPanelHost) {
        match event {
            TagPanelEvent::TagClicked(intent) => {
                let ctx = ClickContext {
                    region_selected: !self.regions.is_empty(),
                    click_forwarding: host.handles_tag_click(),
                    ctrl_click_forwarding: host.handles_ctrl_tag_click(),
                };
                let (next, effect) = transition(&self.selection, &intent, &ctx);
                self.selection = next;
                match effect {
                    Some(ClickEffect::ForwardClick(tag)) => host.on_tag_click(&tag),
                    Some(ClickEffect::ForwardCtrlClick(tag)) => host.on_ctrl_tag_click(&tag),
                    None => {}
                }
            }
            TagPanelEvent::MenuDismissed => {
                self.selection.dismiss_overlay();
            }
            TagPanelEvent::RenameRequested => {
                self.selection.begin_rename();
            }
            TagPanelEvent::ColorEditRequested => {
                self.selection.begin_color_edit();
            }
            TagPanelEvent::DeleteRequested => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.selection.dismiss_overlay();
                    self.collection.delete(&selected, host);
                }
            }
            TagPanelEvent::MoveUpRequested => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.collection.reorder(&selected, -1, host);
                }
            }
            TagPanelEvent::MoveDownRequested => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.collection.reorder(&selected, 1, host);
                }
            }
            TagPanelEvent::LockToggled => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.locks.toggle(&selected.name);
                    host.on_locked_tags_change(self.locks.names());
                }
            }
            TagPanelEvent::TypeSelected(tag_type) => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.collection
                        .set_type(&selected, tag_type, Some(selected.format), host);
                    self.selection.resolve_against(self.collection.tags());
                }
            }
            TagPanelEvent::FormatSelected(format) => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.collection.set_format(&selected, format, host);
                    self.selection.resolve_against(self.collection.tags());
                }
            }
            TagPanelEvent::ColorPicked(color) => {
                if let Some(selected) = self.selection.selected().cloned() {
                    self.collection.recolor(&selected, &color, host);
                    self.selection.dismiss_overlay();
                    self.selection.resolve_against(self.collection.tags());
                }
            }
            TagPanelEvent::RenameSubmitted(new_name) => {
                if let Some(selected) = self.selection.selected().cloned() {
                    let mut renamed = selected.clone();
                    renamed.name = new_name;
                    match self.collection.update(&selected, renamed, host) {
                        Ok(()) => self.selection.dismiss_overlay(),
                        // Keep the rename input open so the user can fix it.
                        Err(err) => Self::reject(&err, host),
                    }
                }
            }
            TagPanelEvent::RenameCancelled => {
                self.selection.dismiss_overlay();
            }
            TagPanelEvent::AddSubmitted(name) => {
                let color = self.palette.next_color(self.collection.tags());
                let tag = Tag::new(name.trim(), &color);
                if let Err(err) = self.collection.add(tag, host) {
                    Self::reject(&err, host);
                }
            }
            TagPanelEvent::AddBoxToggled => {
                self.add_box_open = !self.add_box_open;
            }
            TagPanelEvent::SearchBoxToggled => {
                self.search_box_open = !self.search_box_open;
                if !self.search_box_open {
                    self.query.clear();
                }
            }
            TagPanelEvent::SearchChanged(query) => {
                self.query = query;
            }
            TagPanelEvent::EscapePressed => {
                // Cancels the open input locally; the collection is never
                // touched from here.
                if self.search_box_open || !self.query.is_empty() {
                    self.search_box_open = false;
                    self.query.clear();
                } else if self.add_box_open {
                    self.add_box_open = false;
                }
            }
        }
    }

    fn reject(err: &ValidationError, host: &mut dyn TagPanelHost) {
        log::warn!("Rejected tag mutation: {err}");
        host.on_warning(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ClickIntent, OperationMode};
    use crate::model::{TagFormat, TagType};

    /// Host double that records every notification.
    #[derive(Debug, Default)]
    struct RecordingHost {
        changes: Vec<Vec<Tag>>,
        renames: Vec<(Tag, Tag)>,
        deletes: Vec<String>,
        tag_changes: Vec<(Tag, Tag)>,
        locked_sets: Vec<Vec<String>>,
        clicks: Vec<Tag>,
        ctrl_clicks: Vec<Tag>,
        warnings: Vec<ValidationError>,
        forwards_clicks: bool,
        forwards_ctrl_clicks: bool,
    }

    impl TagPanelHost for RecordingHost {
        fn on_change(&mut self, tags: &[Tag]) {
            self.changes.push(tags.to_vec());
        }

        fn on_tag_renamed(&mut self, old: &Tag, new: &Tag) {
            self.renames.push((old.clone(), new.clone()));
        }

        fn on_tag_deleted(&mut self, name: &str) {
            self.deletes.push(name.to_string());
        }

        fn on_tag_changed(&mut self, old: &Tag, new: &Tag) {
            self.tag_changes.push((old.clone(), new.clone()));
        }

        fn on_locked_tags_change(&mut self, names: &[String]) {
            self.locked_sets.push(names.to_vec());
        }

        fn on_tag_click(&mut self, tag: &Tag) {
            self.clicks.push(tag.clone());
        }

        fn on_ctrl_tag_click(&mut self, tag: &Tag) {
            self.ctrl_clicks.push(tag.clone());
        }

        fn on_warning(&mut self, warning: &ValidationError) {
            self.warnings.push(warning.clone());
        }

        fn handles_tag_click(&self) -> bool {
            self.forwards_clicks
        }

        fn handles_ctrl_tag_click(&self) -> bool {
            self.forwards_ctrl_clicks
        }
    }

    fn panel_with(names: &[&str]) -> TagPanel {
        let mut panel = TagPanel::new(
            Palette::new(&["#111111", "#222222", "#333333", "#444444"]),
            PanelOptions::default(),
        );
        panel.set_tags(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Tag::new(name, &format!("#{:06x}", i + 1)))
                .collect(),
        );
        panel
    }

    fn click(panel: &mut TagPanel, host: &mut RecordingHost, name: &str) {
        let tag = panel.collection.find(name).unwrap().clone();
        panel.handle(TagPanelEvent::TagClicked(ClickIntent::plain(tag)), host);
    }

    fn dropdown_click(panel: &mut TagPanel, host: &mut RecordingHost, name: &str) {
        let tag = panel.collection.find(name).unwrap().clone();
        let intent = ClickIntent {
            dropdown: true,
            ..ClickIntent::plain(tag)
        };
        panel.handle(TagPanelEvent::TagClicked(intent), host);
    }

    #[test]
    fn test_add_allocates_unused_palette_colors() {
        let mut panel = TagPanel::new(
            Palette::new(&["#111111", "#222222"]),
            PanelOptions::default(),
        );
        let mut host = RecordingHost::default();
        panel.handle(TagPanelEvent::AddSubmitted("A".to_string()), &mut host);
        panel.handle(TagPanelEvent::AddSubmitted("B".to_string()), &mut host);
        assert_eq!(panel.tags()[0].color, "#111111");
        assert_eq!(panel.tags()[1].color, "#222222");
        assert_eq!(host.changes.len(), 2);
    }

    #[test]
    fn test_duplicate_add_warns_once_and_keeps_state() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost::default();
        panel.handle(TagPanelEvent::AddSubmitted(" a ".to_string()), &mut host);
        assert_eq!(panel.tags().len(), 1);
        assert_eq!(host.warnings.len(), 1);
        assert!(matches!(
            host.warnings[0],
            ValidationError::DuplicateName { .. }
        ));
        assert!(host.changes.is_empty());
    }

    #[test]
    fn test_dropdown_opens_menu_then_type_change_resets_format() {
        let mut panel = panel_with(&["X"]);
        let mut host = RecordingHost::default();

        dropdown_click(&mut panel, &mut host, "X");
        assert_eq!(panel.selection().mode(), OperationMode::ContextualMenu);
        assert!(panel.selection().is_selected("X"));

        panel.handle(TagPanelEvent::TypeSelected(TagType::Number), &mut host);
        panel.handle(
            TagPanelEvent::FormatSelected(TagFormat::Currency),
            &mut host,
        );
        assert_eq!(panel.tags()[0].format, TagFormat::Currency);

        panel.handle(TagPanelEvent::TypeSelected(TagType::Integer), &mut host);
        assert_eq!(panel.tags()[0].tag_type, TagType::Integer);
        assert_eq!(panel.tags()[0].format, TagFormat::NotSpecified);

        // The stored selection follows the committed edit.
        assert_eq!(
            panel.selection().selected().unwrap().tag_type,
            TagType::Integer
        );
    }

    #[test]
    fn test_dropdown_click_again_closes_menu() {
        let mut panel = panel_with(&["X"]);
        let mut host = RecordingHost::default();
        dropdown_click(&mut panel, &mut host, "X");
        dropdown_click(&mut panel, &mut host, "X");
        assert_eq!(panel.selection().mode(), OperationMode::None);
        assert!(panel.selection().is_selected("X"));
    }

    #[test]
    fn test_move_up_scenario() {
        let mut panel = panel_with(&["A", "B", "C"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "B");
        panel.handle(TagPanelEvent::MoveUpRequested, &mut host);
        let names: Vec<_> = panel.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_move_past_either_end_is_silent() {
        let mut panel = panel_with(&["A", "B"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "A");
        panel.handle(TagPanelEvent::MoveUpRequested, &mut host);
        let names: Vec<_> = panel.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(host.changes.is_empty());
        assert!(host.warnings.is_empty());
    }

    #[test]
    fn test_rename_submit_delegates_to_host() {
        let mut panel = panel_with(&["A", "B"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "A");
        panel.handle(TagPanelEvent::RenameRequested, &mut host);
        assert_eq!(panel.selection().mode(), OperationMode::Rename);

        panel.handle(TagPanelEvent::RenameSubmitted("C".to_string()), &mut host);
        assert_eq!(host.renames.len(), 1);
        assert_eq!(host.renames[0].1.name, "C");
        // Not committed locally; the host feeds the new list back.
        let names: Vec<_> = panel.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(panel.selection().mode(), OperationMode::None);

        let color = panel.tags()[0].color.clone();
        let kept = panel.tags()[1].clone();
        panel.set_tags(vec![Tag::new("C", &color), kept]);
        // Old selection no longer resolves after the rename lands.
        assert!(panel.selection().selected().is_none());
    }

    #[test]
    fn test_rename_to_duplicate_keeps_input_open_and_warns() {
        let mut panel = panel_with(&["A", "B"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "A");
        panel.handle(TagPanelEvent::RenameRequested, &mut host);
        panel.handle(TagPanelEvent::RenameSubmitted(" b ".to_string()), &mut host);
        assert_eq!(host.warnings.len(), 1);
        assert!(host.renames.is_empty());
        assert_eq!(panel.selection().mode(), OperationMode::Rename);
    }

    #[test]
    fn test_delete_delegates_and_closes_menu() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost::default();
        dropdown_click(&mut panel, &mut host, "A");
        panel.handle(TagPanelEvent::DeleteRequested, &mut host);
        assert_eq!(host.deletes, ["A"]);
        assert_eq!(panel.tags().len(), 1);
        assert_eq!(panel.selection().mode(), OperationMode::None);

        panel.set_tags(Vec::new());
        assert!(panel.selection().selected().is_none());
    }

    #[test]
    fn test_color_pick_commits_and_closes_picker() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost::default();
        let tag = panel.tags()[0].clone();
        let intent = ClickIntent {
            color_swatch: true,
            ..ClickIntent::plain(tag)
        };
        panel.handle(TagPanelEvent::TagClicked(intent), &mut host);
        assert_eq!(panel.selection().mode(), OperationMode::ColorPicker);

        panel.handle(
            TagPanelEvent::ColorPicked("#333333".to_string()),
            &mut host,
        );
        assert_eq!(panel.tags()[0].color, "#333333");
        assert_eq!(panel.selection().mode(), OperationMode::None);
        assert_eq!(panel.selection().selected().unwrap().color, "#333333");
    }

    #[test]
    fn test_lock_toggle_notifies_with_full_set() {
        let mut panel = panel_with(&["A", "B"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "A");
        panel.handle(TagPanelEvent::LockToggled, &mut host);
        assert!(panel.is_locked("a"));
        assert_eq!(host.locked_sets, [vec!["A".to_string()]]);

        panel.handle(TagPanelEvent::LockToggled, &mut host);
        assert!(!panel.is_locked("A"));
        assert_eq!(host.locked_sets.last().unwrap().len(), 0);
    }

    #[test]
    fn test_region_selection_clears_tag_selection() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost::default();
        click(&mut panel, &mut host, "A");
        assert!(panel.selection().selected().is_some());

        panel.set_selected_regions(vec![Region::new("r1", &["A"])]);
        assert!(panel.selection().selected().is_none());
    }

    #[test]
    fn test_click_with_region_selected_forwards_as_label() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost {
            forwards_clicks: true,
            ..RecordingHost::default()
        };
        panel.set_selected_regions(vec![Region::new("r1", &[])]);
        click(&mut panel, &mut host, "A");
        click(&mut panel, &mut host, "A");
        assert_eq!(host.clicks.len(), 2);
        assert!(panel.selection().is_selected("A"));
    }

    #[test]
    fn test_ctrl_click_forwards_when_host_handles_it() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost {
            forwards_ctrl_clicks: true,
            ..RecordingHost::default()
        };
        let intent = ClickIntent {
            ctrl: true,
            ..ClickIntent::plain(panel.tags()[0].clone())
        };
        panel.handle(TagPanelEvent::TagClicked(intent), &mut host);
        assert_eq!(host.ctrl_clicks.len(), 1);
        assert!(panel.selection().selected().is_none());
    }

    #[test]
    fn test_search_narrows_visible_tags() {
        let mut panel = panel_with(&["Car", "Person", "Cargo ship"]);
        let mut host = RecordingHost::default();
        panel.handle(TagPanelEvent::SearchBoxToggled, &mut host);
        panel.handle(TagPanelEvent::SearchChanged("car".to_string()), &mut host);
        let names: Vec<_> = panel
            .visible_tags()
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, ["Car", "Cargo ship"]);
        assert_eq!(panel.tags().len(), 3);
    }

    #[test]
    fn test_escape_cancels_search_then_add_box() {
        let mut panel = panel_with(&[]);
        let mut host = RecordingHost::default();
        panel.handle(TagPanelEvent::AddBoxToggled, &mut host);
        panel.handle(TagPanelEvent::SearchBoxToggled, &mut host);
        panel.handle(TagPanelEvent::SearchChanged("x".to_string()), &mut host);

        panel.handle(TagPanelEvent::EscapePressed, &mut host);
        assert!(!panel.search_box_visible());
        assert!(panel.query().is_empty());
        assert!(panel.add_box_visible());

        panel.handle(TagPanelEvent::EscapePressed, &mut host);
        assert!(!panel.add_box_visible());
        assert!(host.changes.is_empty());
    }

    #[test]
    fn test_always_show_options_keep_boxes_visible() {
        let panel = TagPanel::new(
            Palette::default(),
            PanelOptions {
                always_show_add_box: true,
                always_show_search_box: true,
            },
        );
        assert!(panel.add_box_visible());
        assert!(panel.search_box_visible());
    }

    #[test]
    fn test_labels_and_region_application_queries() {
        let mut panel = panel_with(&["A", "B"]);
        panel.set_labels(vec![
            LabelRef::new("l1", "A"),
            LabelRef::new("l2", "a"),
            LabelRef::new("l3", "B"),
        ]);
        assert_eq!(panel.labels_for("A").len(), 2);

        panel.set_selected_regions(vec![
            Region::new("r1", &["A", "B"]),
            Region::new("r2", &["a"]),
        ]);
        assert!(panel.is_applied_to_selection("A"));
        assert!(!panel.is_applied_to_selection("B"));
    }

    #[test]
    fn test_menu_actions_without_selection_are_noops() {
        let mut panel = panel_with(&["A"]);
        let mut host = RecordingHost::default();
        panel.handle(TagPanelEvent::DeleteRequested, &mut host);
        panel.handle(TagPanelEvent::MoveUpRequested, &mut host);
        panel.handle(TagPanelEvent::LockToggled, &mut host);
        panel.handle(TagPanelEvent::TypeSelected(TagType::Date), &mut host);
        assert!(host.deletes.is_empty());
        assert!(host.changes.is_empty());
        assert!(host.locked_sets.is_empty());
        assert!(host.tag_changes.is_empty());
    }
}
