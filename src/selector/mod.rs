mod model;
mod render;
pub mod search;

pub use model::{build, normalize_selection, resolve_selection, Entry};
pub use render::RowLayout;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::{CatalogProvider, FileType, Language, LanguageLookup, ProfileLookup};
use model::normalized_index;

/// Built entry list together with the current selection.
#[derive(Debug, Clone)]
pub struct FileTypeSelector {
    entries: Arc<[Entry]>,
    selected: Option<usize>,
}

impl FileTypeSelector {
    pub fn new<C>(catalog: &C) -> Self
    where
        C: CatalogProvider + ProfileLookup + LanguageLookup,
    {
        Self::from_entries(build(catalog))
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let selected = entries.iter().position(Entry::is_enabled);
        Self {
            entries: entries.into(),
            selected,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn shared_entries(&self) -> Arc<[Entry]> {
        Arc::clone(&self.entries)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.selected.map(|index| &self.entries[index])
    }

    pub fn selected_file_type(&self) -> Option<&Arc<FileType>> {
        self.selected().map(Entry::file_type)
    }

    /// Selects the row for the given file type, dialect and context.
    ///
    /// The current selection is kept when nothing matches. Returns whether
    /// the selection changed.
    pub fn select(
        &mut self,
        file_type: &FileType,
        dialect: Option<&Language>,
        context: Option<&str>,
    ) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.is_equal_to(file_type, dialect, context))
        else {
            trace!(file_type = %file_type.name, ?context, "no entry to select");
            return false;
        };
        self.select_index(index)
    }

    pub fn select_entry(&mut self, entry: &Entry) -> bool {
        match self.entries.iter().position(|candidate| candidate == entry) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        let index = normalized_index(&self.entries, index);
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        if changed {
            debug!(index, text = %self.entries[index].full_text(), "selection changed");
        }
        changed
    }

    /// Moves the selection to the next row matching `query`, as typing in the
    /// list does.
    pub fn select_next_match(&mut self, query: &str) -> bool {
        let from = self.selected.map_or(0, |index| index + 1);
        match search::find_next(&self.entries, query, from) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }
}
