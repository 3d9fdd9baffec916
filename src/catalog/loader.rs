use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, trace};

use super::model::{DialectPolicy, FileType, FileTypeKind, Language, Profile};
use super::{CatalogProvider, LanguageLookup, ProfileLookup};
use crate::error::{CatalogError, IoError, Result};

const BUNDLED_CATALOG: &str = include_str!("../../catalogs/default.yaml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    languages: Vec<LanguageSpec>,
    #[serde(default)]
    file_types: Vec<FileTypeSpec>,
    #[serde(default)]
    profiles: Vec<ProfileSpec>,
}

#[derive(Debug, Deserialize)]
struct LanguageSpec {
    id: String,
    display_name: String,
    #[serde(default)]
    base: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileTypeSpec {
    name: String,
    description: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default = "default_suitable")]
    suitable: bool,
}

#[derive(Debug, Deserialize)]
struct ProfileSpec {
    file_types: Vec<String>,
    #[serde(default)]
    contexts: Vec<String>,
    #[serde(default)]
    dialects: Option<Vec<String>>,
}

fn default_suitable() -> bool {
    true
}

/// Languages, file types and search profiles known to the selector.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: Vec<Arc<Language>>,
    file_types: Vec<Arc<FileType>>,
    unsuitable: HashSet<String>,
    profiles: Vec<Profile>,
    profile_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bundled() -> std::result::Result<Self, CatalogError> {
        debug!("loading bundled catalog");
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading catalog");

        if !path.exists() {
            return Err(IoError::file_not_found(path).into());
        }
        let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let file: CatalogFile = match extension.as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| CatalogError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| CatalogError::parse_error(path, e.to_string()))?,
            _ => return Err(CatalogError::unsupported_format(extension).into()),
        };

        let catalog = Self::from_catalog_file(file)?;
        debug!(
            path = %path.display(),
            languages = catalog.language_count(),
            file_types = catalog.file_type_count(),
            profiles = catalog.profile_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| CatalogError::parse_error("<inline>", e.to_string()))?;
        Self::from_catalog_file(file)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)
            .map_err(|e| CatalogError::parse_error("<inline>", e.to_string()))?;
        Self::from_catalog_file(file)
    }

    fn from_catalog_file(file: CatalogFile) -> std::result::Result<Self, CatalogError> {
        let mut catalog = Self::new();

        // Dialects may be listed before their base language.
        for spec in file.languages {
            catalog.insert_language(Language {
                id: spec.id,
                display_name: spec.display_name,
                base: spec.base,
            })?;
        }
        for language in &catalog.languages {
            if let Some(base) = &language.base {
                if catalog.language(base).is_none() {
                    return Err(CatalogError::unknown_language(
                        base.as_str(),
                        format!("language '{}'", language.id),
                    ));
                }
            }
            catalog.check_base_chain(language)?;
        }

        for spec in file.file_types {
            let kind = match spec.language {
                Some(id) => {
                    let language = catalog.language(&id).cloned().ok_or_else(|| {
                        CatalogError::unknown_language(
                            id.as_str(),
                            format!("file type '{}'", spec.name),
                        )
                    })?;
                    FileTypeKind::LanguageBacked(language)
                }
                None => FileTypeKind::Plain,
            };
            let name = spec.name.clone();
            catalog.add_file_type(FileType {
                name: spec.name,
                description: spec.description,
                icon: spec.icon,
                kind,
            })?;
            if !spec.suitable {
                catalog.mark_unsuitable(&name);
            }
        }

        for spec in file.profiles {
            let dialects = match spec.dialects {
                Some(ids) => DialectPolicy::Only(ids),
                None => DialectPolicy::All,
            };
            catalog.add_profile(Profile {
                file_types: spec.file_types,
                contexts: spec.contexts,
                dialects,
            })?;
        }

        Ok(catalog)
    }

    fn insert_language(
        &mut self,
        language: Language,
    ) -> std::result::Result<Arc<Language>, CatalogError> {
        if self.language(&language.id).is_some() {
            return Err(CatalogError::DuplicateLanguage { id: language.id });
        }
        let language = Arc::new(language);
        self.languages.push(language.clone());
        Ok(language)
    }

    /// Follows `base` links from `language` and fails when they loop back.
    fn check_base_chain(&self, language: &Language) -> std::result::Result<(), CatalogError> {
        let mut seen = HashSet::new();
        seen.insert(language.id.as_str());
        let mut current = language.base.as_deref();
        while let Some(id) = current {
            if !seen.insert(id) {
                return Err(CatalogError::DialectCycle {
                    id: language.id.clone(),
                });
            }
            current = self.language(id).and_then(|base| base.base.as_deref());
        }
        Ok(())
    }

    /// Adds a language; a dialect's base must already be present.
    pub fn add_language(
        &mut self,
        language: Language,
    ) -> std::result::Result<Arc<Language>, CatalogError> {
        if language.base.as_deref() == Some(language.id.as_str()) {
            return Err(CatalogError::DialectCycle { id: language.id });
        }
        if let Some(base) = &language.base {
            if self.language(base).is_none() {
                return Err(CatalogError::unknown_language(
                    base.as_str(),
                    format!("language '{}'", language.id),
                ));
            }
        }
        self.insert_language(language)
    }

    pub fn add_file_type(
        &mut self,
        file_type: FileType,
    ) -> std::result::Result<Arc<FileType>, CatalogError> {
        if self.file_type(&file_type.name).is_some() {
            return Err(CatalogError::DuplicateFileType {
                name: file_type.name,
            });
        }
        if let Some(language) = file_type.language() {
            if self.language(&language.id).is_none() {
                return Err(CatalogError::unknown_language(
                    language.id.as_str(),
                    format!("file type '{}'", file_type.name),
                ));
            }
        }
        trace!(name = %file_type.name, "adding file type");
        let file_type = Arc::new(file_type);
        self.file_types.push(file_type.clone());
        Ok(file_type)
    }

    /// Keeps a file type in the catalog but hides it from structural search.
    pub fn mark_unsuitable(&mut self, name: &str) {
        self.unsuitable.insert(name.to_string());
    }

    pub fn add_profile(&mut self, profile: Profile) -> std::result::Result<(), CatalogError> {
        for name in &profile.file_types {
            if self.file_type(name).is_none() {
                return Err(CatalogError::UnknownFileType { name: name.clone() });
            }
            if self.profile_index.contains_key(name) {
                return Err(CatalogError::ProfileConflict { name: name.clone() });
            }
        }
        if let DialectPolicy::Only(ids) = &profile.dialects {
            for id in ids {
                if self.language(id).is_none() {
                    return Err(CatalogError::unknown_language(
                        id.as_str(),
                        format!("profile for {:?}", profile.file_types),
                    ));
                }
            }
        }

        let index = self.profiles.len();
        for name in &profile.file_types {
            self.profile_index.insert(name.clone(), index);
        }
        self.profiles.push(profile);
        Ok(())
    }

    pub fn language(&self, id: &str) -> Option<&Arc<Language>> {
        self.languages.iter().find(|language| language.id == id)
    }

    pub fn file_type(&self, name: &str) -> Option<&Arc<FileType>> {
        self.file_types.iter().find(|file_type| file_type.name == name)
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn file_type_count(&self) -> usize {
        self.file_types.len()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl CatalogProvider for Catalog {
    fn suitable_file_types(&self) -> Vec<Arc<FileType>> {
        self.file_types
            .iter()
            .filter(|file_type| !self.unsuitable.contains(&file_type.name))
            .cloned()
            .collect()
    }
}

impl ProfileLookup for Catalog {
    type Profile = Profile;

    fn profile_for(&self, file_type: &FileType) -> Option<&Profile> {
        self.profile_index
            .get(&file_type.name)
            .map(|&index| &self.profiles[index])
    }
}

impl LanguageLookup for Catalog {
    fn dialects_of(&self, language: &Language) -> Vec<Arc<Language>> {
        self.languages
            .iter()
            .filter(|candidate| candidate.is_dialect_of(language))
            .cloned()
            .collect()
    }
}
