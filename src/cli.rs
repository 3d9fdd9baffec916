use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::output::OutputFormatter;
use crate::selector::{self, search};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "filetype-selector")]
#[command(about = "File type selector - list and resolve structural search file types", long_about = None)]
pub struct Args {
    /// Catalog file (JSON or YAML); the bundled catalog is used if not specified
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Only show rows whose text contains QUERY (case-insensitive)
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Resolve the row for this file type name instead of listing rows
    #[arg(long, value_name = "FILE_TYPE")]
    pub select: Option<String>,

    /// Dialect (language id) to resolve together with --select
    #[arg(long, value_name = "ID", requires = "select")]
    pub dialect: Option<String>,

    /// Context name to resolve together with --select
    #[arg(long, value_name = "NAME", requires = "select")]
    pub context: Option<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref catalog_path) = self.catalog {
            validate_catalog_path(catalog_path)?;
        }
        if self.select.is_some() && self.search.is_some() {
            anyhow::bail!("--search cannot be combined with --select");
        }
        Ok(())
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => Catalog::from_bundled().context("Failed to load bundled catalog"),
        }
    }
}

pub fn validate_catalog_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Catalog file does not exist: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("Catalog path is not a file: {}", path.display());
    }

    std::fs::metadata(path)
        .with_context(|| format!("Cannot read catalog file: {}", path.display()))?;

    Ok(())
}

/// Produces the text the binary prints for `args` against `catalog`.
pub fn render(args: &Args, catalog: &Catalog) -> Result<String> {
    let entries = selector::build(catalog);

    let Some(name) = args.select.as_deref() else {
        let query = args.search.as_deref().unwrap_or("");
        let indices = search::filter(&entries, query);
        return OutputFormatter::format(&entries, &indices, args.search.as_deref(), args.format);
    };

    let file_type = catalog
        .file_type(name)
        .with_context(|| format!("Unknown file type: {name}"))?;
    let dialect = match args.dialect.as_deref() {
        Some(id) => Some(
            catalog
                .language(id)
                .with_context(|| format!("Unknown dialect: {id}"))?,
        ),
        None => None,
    };

    let requested = selector::resolve_selection(
        &entries,
        file_type,
        dialect.map(|d| &**d),
        args.context.as_deref(),
    )
    .with_context(|| format!("No selectable row for file type {name}"))?;
    let selected = selector::normalize_selection(&entries, requested);

    let index_of = |target: &selector::Entry| {
        entries
            .iter()
            .position(|entry| std::ptr::eq(entry, target))
            .context("entry is not part of the list")
    };
    OutputFormatter::format_selection(
        &entries,
        index_of(requested)?,
        index_of(selected)?,
        args.format,
    )
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
