mod fixtures;

use std::fs;

use filetype_selector::catalog::{CatalogProvider, LanguageLookup, ProfileLookup, SearchProfile};
use filetype_selector::error::{CatalogError, Error, IoError};
use filetype_selector::{build, Catalog, FileTypeKind};
use fixtures::get_catalog_fixture_path;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn labels(catalog: &Catalog) -> Vec<String> {
    build(catalog).iter().map(|entry| entry.label()).collect()
}

#[test]
fn test_load_yaml_catalog() {
    let catalog = Catalog::from_file(get_catalog_fixture_path("web.yaml")).unwrap();

    assert_eq!(catalog.language_count(), 4);
    assert_eq!(catalog.file_type_count(), 4);
    assert_eq!(catalog.profile_count(), 3);
    assert_eq!(catalog.suitable_file_types().len(), 3);
}

#[test]
fn test_yaml_and_json_catalogs_agree() {
    let yaml = Catalog::from_file(get_catalog_fixture_path("web.yaml")).unwrap();
    let json = Catalog::from_file(get_catalog_fixture_path("web.json")).unwrap();

    assert_eq!(build(&yaml), build(&json));
}

#[test]
fn test_web_catalog_rows() {
    let catalog = Catalog::from_file(get_catalog_fixture_path("web.yaml")).unwrap();

    assert_eq!(
        labels(&catalog),
        vec![
            "Markup (HTML)",
            "Tag",
            "Attribute",
            "JavaScript",
            "ECMAScript 6",
            "JSX Harmony",
            "Markup (XML)",
            "Tag",
            "Attribute",
        ]
    );
}

#[test]
fn test_language_backed_kind() {
    let catalog = Catalog::from_file(get_catalog_fixture_path("web.yaml")).unwrap();

    let javascript = catalog.file_type("JavaScript").unwrap();
    match &javascript.kind {
        FileTypeKind::LanguageBacked(language) => {
            assert_eq!(language.id, "javascript");
            assert_eq!(catalog.dialects_of(language).len(), 2);
        }
        FileTypeKind::Plain => panic!("JavaScript should be language-backed"),
    }
    assert_eq!(catalog.file_type("XML").unwrap().kind, FileTypeKind::Plain);
}

#[test]
fn test_shared_profile() {
    let catalog = Catalog::from_file(get_catalog_fixture_path("web.yaml")).unwrap();

    let html = catalog.file_type("HTML").unwrap();
    let xml = catalog.file_type("XML").unwrap();
    let html_profile = catalog.profile_for(html).unwrap();
    let xml_profile = catalog.profile_for(xml).unwrap();
    assert!(std::ptr::eq(html_profile, xml_profile));
    assert_eq!(xml_profile.context_names(), ["Tag", "Attribute"]);
}

#[test]
fn test_missing_catalog_file() {
    let result = Catalog::from_file("/nonexistent/catalog.yaml");
    assert!(matches!(
        result,
        Err(Error::Io(IoError::FileNotFound { .. }))
    ));
}

#[test]
fn test_unsupported_extension() {
    let result = Catalog::from_file(get_catalog_fixture_path("catalog.toml"));
    assert!(matches!(
        result,
        Err(Error::Catalog(CatalogError::UnsupportedFormat { ref format })) if format == "toml"
    ));
}

#[test]
fn test_unknown_language_reference() {
    let result = Catalog::from_file(get_catalog_fixture_path("unknown_language.yaml"));
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown language 'kotlin' referenced by file type 'Kotlin'"
    );
}

#[test]
fn test_language_based_on_itself() {
    let result = Catalog::from_file(get_catalog_fixture_path("self_dialect.yaml"));
    assert!(matches!(
        result,
        Err(Error::Catalog(CatalogError::DialectCycle { ref id })) if id == "javascript"
    ));
}

#[test]
fn test_uppercase_extension() {
    let temp_dir = TempDir::new().unwrap();
    let yaml_path = temp_dir.path().join("catalog.YAML");
    let json_path = temp_dir.path().join("catalog.Json");
    fs::copy(get_catalog_fixture_path("web.yaml"), &yaml_path).unwrap();
    fs::copy(get_catalog_fixture_path("web.json"), &json_path).unwrap();

    let yaml = Catalog::from_file(&yaml_path).unwrap();
    let json = Catalog::from_file(&json_path).unwrap();
    assert_eq!(build(&yaml).len(), 9);
    assert_eq!(build(&yaml), build(&json));
}

#[test]
fn test_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    fs::write(&path, "file_types:\n  - name: [unterminated\n").unwrap();

    let result = Catalog::from_file(&path);
    assert!(matches!(
        result,
        Err(Error::Catalog(CatalogError::ParseError { .. }))
    ));
}

#[test]
fn test_missing_required_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, r#"{ "file_types": [ { "name": "XML" } ] }"#).unwrap();

    let err = Catalog::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("description"));
}

#[test]
fn test_empty_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, "{}").unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    assert!(build(&catalog).is_empty());
}

#[test]
fn test_bundled_catalog_rows() {
    let catalog = Catalog::from_bundled().unwrap();
    let entries = build(&catalog);

    assert!(entries
        .iter()
        .all(|entry| entry.file_type().name != "ARCHIVE"));

    let java_header = entries
        .iter()
        .position(|entry| entry.file_type().name == "JAVA")
        .unwrap();
    assert!(!entries[java_header].is_enabled());
    assert_eq!(entries[java_header + 1].context(), Some("Default"));
    assert_eq!(entries[java_header + 2].context(), Some("Class Member"));
}
