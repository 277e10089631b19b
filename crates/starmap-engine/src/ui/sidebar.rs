//! Selectable list + label + collapsible panel, as shown by the host page.
//!
//! The host renders whatever this model says and forwards clicks back as
//! `InputEvent::Select` / `InputEvent::TogglePanel`. Every visible change bumps
//! `revision` so the host only re-reads the strings when something changed.

use serde::Serialize;

use crate::api::error::SelectionError;

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub index: usize,
    pub name: String,
}

pub struct Sidebar {
    entries: Vec<ListEntry>,
    selected: Option<usize>,
    label: String,
    panel_open: bool,
    viewport_width: f32,
    narrow_breakpoint: f32,
    revision: u32,
}

impl Sidebar {
    pub fn new(narrow_breakpoint: f32) -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            label: String::new(),
            panel_open: false,
            viewport_width: f32::INFINITY,
            narrow_breakpoint,
            revision: 0,
        }
    }

    /// Replace the list. Clears any selection.
    pub fn set_entries<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) {
        self.entries = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| ListEntry { index, name: name.into() })
            .collect();
        self.selected = None;
        self.revision += 1;
    }

    /// Select entry `index`: the label shows its name and, on a narrow
    /// viewport, the overlay panel closes.
    pub fn select(&mut self, index: usize) -> Result<&ListEntry, SelectionError> {
        let len = self.entries.len();
        let entry = self.entries.get(index).ok_or(SelectionError::OutOfRange { index, len })?;
        self.selected = Some(index);
        self.label.clone_from(&entry.name);
        if self.is_narrow() {
            self.panel_open = false;
        }
        self.revision += 1;
        Ok(entry)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.revision += 1;
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
        self.revision += 1;
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Narrow viewports show the list as an overlay instead of a column.
    pub fn is_narrow(&self) -> bool {
        self.viewport_width <= self.narrow_breakpoint
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Entries as a JSON array of `{index, name}` objects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(768.0)
    }
}
