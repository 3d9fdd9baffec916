/// File Type Selector
///
/// Builds the list of file types, dialects and contexts offered by a
/// structural search dialog, and resolves selections against it.
pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod selector;

pub use catalog::{Catalog, FileType, FileTypeKind, Language, Profile};
pub use selector::{
    build, normalize_selection, resolve_selection, Entry, FileTypeSelector,
};
