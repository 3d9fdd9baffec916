use super::Entry;

/// How a row is laid out in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout<'a> {
    /// File type icon followed by the full text.
    TopLevel { icon: Option<&'a str> },
    /// Indented past the icon column, short text only.
    Nested,
}

impl Entry {
    /// Description of the file type, qualified by its name when the
    /// description alone is ambiguous.
    pub fn file_type_text(&self) -> String {
        let file_type = self.file_type();
        if self.is_duplicated() {
            format!("{} ({})", file_type.description, file_type.name)
        } else {
            file_type.description.clone()
        }
    }

    pub fn text(&self) -> String {
        if let Some(context) = self.context() {
            return context.to_string();
        }
        if let Some(dialect) = self.dialect() {
            return dialect.display_name.clone();
        }
        self.file_type_text()
    }

    pub fn full_text(&self) -> String {
        if self.is_nested() {
            format!("{} - {}", self.file_type_text(), self.text())
        } else {
            self.file_type_text()
        }
    }

    pub fn search_text(&self) -> String {
        self.full_text()
    }

    pub fn is_nested(&self) -> bool {
        self.dialect().is_some() || self.context().is_some()
    }

    pub fn layout(&self) -> RowLayout<'_> {
        if self.is_nested() {
            RowLayout::Nested
        } else {
            RowLayout::TopLevel {
                icon: self.file_type().icon.as_deref(),
            }
        }
    }

    pub fn label(&self) -> String {
        match self.layout() {
            RowLayout::Nested => self.text(),
            RowLayout::TopLevel { .. } => self.full_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FileType, Language};
    use std::sync::Arc;

    fn xml() -> Arc<FileType> {
        Arc::new(FileType::plain("XML", "XML files").with_icon("xml.svg"))
    }

    #[test]
    fn test_base_entry_text() {
        let entry = Entry::new(xml(), None, None, true, false);
        assert_eq!(entry.text(), "XML files");
        assert_eq!(entry.full_text(), "XML files");
        assert!(!entry.is_nested());
        assert_eq!(
            entry.layout(),
            RowLayout::TopLevel {
                icon: Some("xml.svg")
            }
        );
    }

    #[test]
    fn test_duplicated_entry_is_qualified() {
        let entry = Entry::new(xml(), None, None, true, true);
        assert_eq!(entry.file_type_text(), "XML files (XML)");
        assert_eq!(entry.label(), "XML files (XML)");
    }

    #[test]
    fn test_context_entry_text() {
        let entry = Entry::new(xml(), None, Some("Attribute".to_string()), true, false);
        assert_eq!(entry.text(), "Attribute");
        assert_eq!(entry.full_text(), "XML files - Attribute");
        assert_eq!(entry.search_text(), "XML files - Attribute");
        assert_eq!(entry.label(), "Attribute");
        assert_eq!(entry.layout(), RowLayout::Nested);
    }

    #[test]
    fn test_dialect_entry_text() {
        let js = Arc::new(Language::new("javascript", "JavaScript"));
        let file_type = Arc::new(FileType::language_backed("JavaScript", "JavaScript", js));
        let dialect = Arc::new(Language::dialect_of("ecma6", "ECMAScript 6", "javascript"));
        let entry = Entry::new(file_type, Some(dialect), None, true, false);
        assert_eq!(entry.text(), "ECMAScript 6");
        assert_eq!(entry.full_text(), "JavaScript - ECMAScript 6");
    }

    #[test]
    fn test_header_is_top_level() {
        let header = Entry::new(xml(), None, None, false, false);
        assert!(!header.is_nested());
        assert_eq!(header.label(), "XML files");
    }
}
