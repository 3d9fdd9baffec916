use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::selector::Entry;

use super::Row;

const NESTED_INDENT: &str = "    ";

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub total_entries: usize,
    pub selectable_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct SelectionOutput {
    pub requested: Row,
    pub selected: Row,
}

pub struct OutputFormatter;

impl OutputFormatter {
    /// Renders the entries at `indices`, which come from `entries` in list order.
    pub fn format(
        entries: &[Entry],
        indices: &[usize],
        query: Option<&str>,
        format: OutputFormat,
    ) -> Result<String> {
        let output = Self::build_output(entries, indices, query);

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => Ok(output
                .rows
                .iter()
                .map(Self::text_line)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    pub fn build_output(entries: &[Entry], indices: &[usize], query: Option<&str>) -> JsonOutput {
        let rows: Vec<Row> = indices
            .iter()
            .filter_map(|&index| entries.get(index).map(|entry| Row::from_entry(index, entry)))
            .collect();

        JsonOutput {
            total_entries: entries.len(),
            selectable_entries: entries.iter().filter(|entry| entry.is_enabled()).count(),
            query: query.map(str::to_string),
            rows,
        }
    }

    pub fn format_selection(
        entries: &[Entry],
        requested: usize,
        selected: usize,
        format: OutputFormat,
    ) -> Result<String> {
        let (Some(requested_entry), Some(selected_entry)) =
            (entries.get(requested), entries.get(selected))
        else {
            anyhow::bail!("selection index out of range");
        };
        let output = SelectionOutput {
            requested: Row::from_entry(requested, requested_entry),
            selected: Row::from_entry(selected, selected_entry),
        };

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Text if requested == selected => Ok(output.selected.full_text),
            OutputFormat::Text => Ok(format!(
                "{} -> {}",
                output.requested.full_text, output.selected.full_text
            )),
        }
    }

    fn text_line(row: &Row) -> String {
        let marker = if row.enabled { "" } else { ":" };
        if row.nested {
            format!("{NESTED_INDENT}{}{marker}", row.label)
        } else {
            format!("{}{marker}", row.label)
        }
    }
}
