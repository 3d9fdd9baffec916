mod loader;
mod model;

pub use loader::Catalog;
pub use model::{DialectPolicy, FileType, FileTypeKind, Language, Profile};

pub use crate::error::CatalogError;

use std::sync::Arc;

/// Source of the file types offered for structural search.
pub trait CatalogProvider {
    fn suitable_file_types(&self) -> Vec<Arc<FileType>>;
}

/// Contexts and dialect policy a file type is searched with.
pub trait SearchProfile {
    fn context_names(&self) -> &[String];

    fn accepts_dialect(&self, dialect: &Language) -> bool;
}

pub trait ProfileLookup {
    type Profile: SearchProfile;

    fn profile_for(&self, file_type: &FileType) -> Option<&Self::Profile>;
}

pub trait LanguageLookup {
    /// Direct dialects of `language`, in no particular order.
    fn dialects_of(&self, language: &Language) -> Vec<Arc<Language>>;
}
