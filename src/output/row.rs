use serde::Serialize;

use crate::selector::{Entry, RowLayout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: usize,
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub enabled: bool,
    pub duplicated: bool,
    pub nested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// What the list shows: short text for nested rows, full text otherwise.
    pub label: String,
    pub full_text: String,
}

impl Row {
    pub fn from_entry(index: usize, entry: &Entry) -> Self {
        let icon = match entry.layout() {
            RowLayout::TopLevel { icon } => icon.map(str::to_string),
            RowLayout::Nested => None,
        };

        Row {
            index,
            file_type: entry.file_type().name.clone(),
            dialect: entry.dialect().map(|dialect| dialect.id.clone()),
            context: entry.context().map(str::to_string),
            enabled: entry.is_enabled(),
            duplicated: entry.is_duplicated(),
            nested: entry.is_nested(),
            icon,
            label: entry.label(),
            full_text: entry.full_text(),
        }
    }
}
