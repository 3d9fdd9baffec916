use std::sync::Arc;

use super::SearchProfile;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    pub id: String,
    pub display_name: String,
    /// Id of the language this one is a dialect of.
    pub base: Option<String>,
}

impl Language {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            base: None,
        }
    }

    pub fn dialect_of(
        id: impl Into<String>,
        display_name: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            base: Some(base.into()),
        }
    }

    pub fn is_dialect_of(&self, language: &Language) -> bool {
        self.id != language.id && self.base.as_deref() == Some(language.id.as_str())
    }
}

/// Whether a file type is backed by a language, fixed when the catalog is ingested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileTypeKind {
    Plain,
    LanguageBacked(Arc<Language>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileType {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub kind: FileTypeKind,
}

impl FileType {
    pub fn plain(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
            kind: FileTypeKind::Plain,
        }
    }

    pub fn language_backed(
        name: impl Into<String>,
        description: impl Into<String>,
        language: Arc<Language>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
            kind: FileTypeKind::LanguageBacked(language),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn language(&self) -> Option<&Arc<Language>> {
        match &self.kind {
            FileTypeKind::Plain => None,
            FileTypeKind::LanguageBacked(language) => Some(language),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialectPolicy {
    #[default]
    All,
    Only(Vec<String>),
}

impl DialectPolicy {
    pub fn accepts(&self, dialect: &Language) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.iter().any(|id| *id == dialect.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub file_types: Vec<String>,
    pub contexts: Vec<String>,
    pub dialects: DialectPolicy,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_file_types<I, S>(file_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file_types: file_types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts = contexts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dialects<I, S>(mut self, dialects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dialects = DialectPolicy::Only(dialects.into_iter().map(Into::into).collect());
        self
    }

    pub fn serves(&self, file_type: &FileType) -> bool {
        self.file_types.iter().any(|name| *name == file_type.name)
    }
}

impl SearchProfile for Profile {
    fn context_names(&self) -> &[String] {
        &self.contexts
    }

    fn accepts_dialect(&self, dialect: &Language) -> bool {
        self.dialects.accepts(dialect)
    }
}
