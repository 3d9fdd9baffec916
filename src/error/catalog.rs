use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported catalog format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("duplicate language id: {id}")]
    DuplicateLanguage { id: String },

    #[error("duplicate file type: {name}")]
    DuplicateFileType { name: String },

    #[error("unknown language '{id}' referenced by {referenced_by}")]
    UnknownLanguage { id: String, referenced_by: String },

    #[error("language '{id}' is its own dialect through its base chain")]
    DialectCycle { id: String },

    #[error("profile references unknown file type: {name}")]
    UnknownFileType { name: String },

    #[error("file type '{name}' is served by more than one profile")]
    ProfileConflict { name: String },
}

impl CatalogError {
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn unknown_language(id: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::UnknownLanguage {
            id: id.into(),
            referenced_by: referenced_by.into(),
        }
    }
}
