use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::{
    CatalogProvider, FileType, Language, LanguageLookup, ProfileLookup, SearchProfile,
};

/// One selectable row of the file type list.
///
/// Context and dialect rows are flattened into the same sequence as their
/// file type; a disabled entry with neither is the header of a context group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    file_type: Arc<FileType>,
    dialect: Option<Arc<Language>>,
    context: Option<String>,
    enabled: bool,
    duplicated: bool,
}

impl Entry {
    pub(crate) fn new(
        file_type: Arc<FileType>,
        dialect: Option<Arc<Language>>,
        context: Option<String>,
        enabled: bool,
        duplicated: bool,
    ) -> Self {
        Self {
            file_type,
            dialect,
            context,
            enabled,
            duplicated,
        }
    }

    pub fn file_type(&self) -> &Arc<FileType> {
        &self.file_type
    }

    pub fn dialect(&self) -> Option<&Arc<Language>> {
        self.dialect.as_ref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Another file type in the list shares this one's description.
    pub fn is_duplicated(&self) -> bool {
        self.duplicated
    }

    pub fn is_equal_to(
        &self,
        file_type: &FileType,
        dialect: Option<&Language>,
        context: Option<&str>,
    ) -> bool {
        *self.file_type == *file_type
            && self.dialect.as_deref() == dialect
            && self.context.as_deref() == context
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Builds the ordered entry list for every suitable file type that has a profile.
pub fn build<C>(catalog: &C) -> Vec<Entry>
where
    C: CatalogProvider + ProfileLookup + LanguageLookup,
{
    let mut types: Vec<(Arc<FileType>, &C::Profile)> = catalog
        .suitable_file_types()
        .into_iter()
        .filter_map(|file_type| {
            let profile = catalog.profile_for(&file_type)?;
            Some((file_type, profile))
        })
        .collect();
    types.sort_by(|(a, _), (b, _)| compare_ignore_case(&a.name, &b.name));

    let mut entries = Vec::new();
    for (index, (file_type, profile)) in types.iter().enumerate() {
        let duplicated = types
            .iter()
            .enumerate()
            .any(|(other, (candidate, _))| {
                other != index && candidate.description == file_type.description
            });

        let contexts = profile.context_names();
        if !contexts.is_empty() {
            trace!(file_type = %file_type.name, contexts = contexts.len(), "expanding contexts");
            entries.push(Entry::new(file_type.clone(), None, None, false, duplicated));
            for context in contexts {
                entries.push(Entry::new(
                    file_type.clone(),
                    None,
                    Some(context.clone()),
                    true,
                    duplicated,
                ));
            }
            continue;
        }

        entries.push(Entry::new(file_type.clone(), None, None, true, duplicated));

        if let Some(language) = file_type.language() {
            let mut dialects = catalog.dialects_of(language);
            dialects.sort_by(|a, b| a.display_name.cmp(&b.display_name));
            for dialect in dialects {
                if profile.accepts_dialect(&dialect) {
                    trace!(file_type = %file_type.name, dialect = %dialect.id, "adding dialect");
                    entries.push(Entry::new(
                        file_type.clone(),
                        Some(dialect),
                        None,
                        true,
                        duplicated,
                    ));
                }
            }
        }
    }

    debug!(
        file_types = types.len(),
        entries = entries.len(),
        "built selection model"
    );
    entries
}

/// First entry matching the file type, dialect and context exactly.
pub fn resolve_selection<'a>(
    entries: &'a [Entry],
    file_type: &FileType,
    dialect: Option<&Language>,
    context: Option<&str>,
) -> Option<&'a Entry> {
    entries
        .iter()
        .find(|entry| entry.is_equal_to(file_type, dialect, context))
}

/// Redirects a disabled header to the entry right after it, when there is one.
pub fn normalize_selection<'a>(entries: &'a [Entry], requested: &'a Entry) -> &'a Entry {
    if requested.is_enabled() {
        return requested;
    }
    match entries.iter().position(|entry| entry == requested) {
        Some(index) => &entries[normalized_index(entries, index)],
        None => requested,
    }
}

pub(crate) fn normalized_index(entries: &[Entry], index: usize) -> usize {
    match entries.get(index) {
        Some(entry) if !entry.is_enabled() && index + 1 < entries.len() => index + 1,
        _ => index,
    }
}
