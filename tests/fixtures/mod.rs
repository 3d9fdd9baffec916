#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use filetype_selector::{Catalog, FileType, Language, Profile};

pub fn get_catalog_fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalogs")
        .join(fixture_name)
}

/// Adds a plain file type served by its own profile.
pub fn add_plain(catalog: &mut Catalog, name: &str, description: &str) -> Arc<FileType> {
    let file_type = catalog
        .add_file_type(FileType::plain(name, description))
        .unwrap();
    catalog.add_profile(Profile::for_file_types([name])).unwrap();
    file_type
}

/// Adds a language with the given dialects and a file type backed by it.
pub fn add_language_file_type(
    catalog: &mut Catalog,
    name: &str,
    language: (&str, &str),
    dialects: &[(&str, &str)],
) -> Arc<FileType> {
    let base = catalog
        .add_language(Language::new(language.0, language.1))
        .unwrap();
    for (id, display_name) in dialects {
        catalog
            .add_language(Language::dialect_of(*id, *display_name, language.0))
            .unwrap();
    }
    catalog
        .add_file_type(FileType::language_backed(name, language.1, base))
        .unwrap()
}
