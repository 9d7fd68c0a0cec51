//! Blogmark Library
//!
//! A [`DataAccess`] implementation backed by one JSON file holding every
//! document, grouped by language:
//!
//! ```json
//! [
//!   {
//!     "language": "Rust",
//!     "blogs": [
//!       { "title": "Ownership", "html": [ { "type": "Paragraph", "lines": ["..."] } ] }
//!     ]
//!   }
//! ]
//! ```
//!
//! The outer structure must be well formed. Individual blocks never fail to
//! load: a block of an unknown kind or with the wrong fields becomes
//! [`BlockNode::Unsupported`].
//!
//! # Example
//!
//! ```
//! use blogmark_core::DataAccess;
//! use blogmark_library::JsonLibrary;
//!
//! let library = JsonLibrary::from_json_str(r#"[
//!     {"language": "C++", "blogs": [
//!         {"title": "Iterators", "html": [{"type": "Header", "level": 1, "content": "Iterators"}]}
//!     ]}
//! ]"#).unwrap();
//!
//! assert_eq!(library.list_languages(), vec!["C++"]);
//! assert_eq!(library.list_titles("C++"), vec!["Iterators"]);
//! assert_eq!(library.get_document("C++", "Iterators").len(), 1);
//! assert!(library.get_document("C++", "Missing").is_empty());
//! ```

use std::path::Path;

use blogmark_core::{BlockNode, BlogmarkError, DataAccess, Result};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// One document: a title and its blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<BlockNode>,
}

/// Every document written under one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub documents: Vec<Document>,
}

#[derive(Deserialize)]
struct RawLanguage {
    language: String,
    #[serde(default)]
    blogs: Vec<RawBlog>,
}

#[derive(Deserialize)]
struct RawBlog {
    title: String,
    #[serde(default)]
    html: Vec<Value>,
}

impl From<RawLanguage> for Language {
    fn from(raw: RawLanguage) -> Self {
        Self {
            name: raw.language,
            documents: raw
                .blogs
                .into_iter()
                .map(|blog| Document {
                    title: blog.title,
                    blocks: blog.html.into_iter().map(BlockNode::from_json).collect(),
                })
                .collect(),
        }
    }
}

/// Documents loaded from a JSON library file, held in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLibrary {
    languages: Vec<Language>,
}

impl JsonLibrary {
    /// Build a library from already loaded languages.
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Load a library file.
    ///
    /// A file that cannot be read is reported as [`BlogmarkError::Library`]
    /// with the path in the message, not as [`BlogmarkError::Io`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BlogmarkError::Library(format!("cannot read {}: {}", path.display(), e))
        })?;
        let library = Self::from_json_str(&text)?;
        debug!(
            "loaded {} languages, {} documents from {}",
            library.languages.len(),
            library.document_count(),
            path.display()
        );
        Ok(library)
    }

    /// Parse a library from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Vec<RawLanguage> = serde_json::from_str(text)?;
        Ok(Self::new(raw.into_iter().map(Language::from).collect()))
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Total number of documents across all languages.
    pub fn document_count(&self) -> usize {
        self.languages.iter().map(|l| l.documents.len()).sum()
    }

    fn language(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    fn document(&self, language: &str, title: &str) -> Option<&Document> {
        self.language(language)?
            .documents
            .iter()
            .find(|d| d.title == title)
    }
}

impl DataAccess for JsonLibrary {
    fn list_languages(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name.clone()).collect()
    }

    fn list_titles(&self, language: &str) -> Vec<String> {
        self.language(language)
            .map(|l| l.documents.iter().map(|d| d.title.clone()).collect())
            .unwrap_or_default()
    }

    fn get_document(&self, language: &str, title: &str) -> Vec<BlockNode> {
        self.document(language, title)
            .map(|d| d.blocks.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "language": "Bash",
            "blogs": [
                {
                    "title": "Prompts",
                    "html": [
                        {"type": "Header", "level": 1, "content": "Prompts"},
                        {"type": "Paragraph", "lines": ["The prompt \\(PS2\\) will be shown."]},
                        {"type": "Code", "language": "bash", "code": ["echo $PS2"]}
                    ]
                },
                {"title": "Empty", "html": []}
            ]
        },
        {
            "language": "C++",
            "blogs": [
                {
                    "title": "Algorithms",
                    "html": [
                        {"type": "UnorderedList", "list": ["`upper_bound`", "`lower_bound`"]},
                        {"type": "Table", "headers": ["a", "b"], "rows": [["1"], ["2", "3", "4"]]},
                        {"type": "Blockquote", "text": "?"}
                    ]
                }
            ]
        },
        {"language": "Bash", "blogs": [{"title": "Shadowed", "html": []}]}
    ]"#;

    fn sample() -> JsonLibrary {
        JsonLibrary::from_json_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_languages_in_file_order() {
        assert_eq!(sample().list_languages(), vec!["Bash", "C++", "Bash"]);
    }

    #[test]
    fn test_titles() {
        let library = sample();
        assert_eq!(library.list_titles("Bash"), vec!["Prompts", "Empty"]);
        assert_eq!(library.list_titles("C++"), vec!["Algorithms"]);
    }

    #[test]
    fn test_unknown_keys_are_empty() {
        let library = sample();
        assert!(library.list_titles("Haskell").is_empty());
        assert!(library.get_document("Haskell", "Prompts").is_empty());
        assert!(library.get_document("Bash", "Missing").is_empty());
    }

    #[test]
    fn test_lookup_is_exact() {
        let library = sample();
        assert!(library.list_titles("bash").is_empty());
        assert!(library.get_document("Bash", "prompts").is_empty());
    }

    #[test]
    fn test_duplicate_language_resolves_to_first() {
        let library = sample();
        assert!(library.get_document("Bash", "Shadowed").is_empty());
    }

    #[test]
    fn test_document_blocks() {
        let blocks = sample().get_document("Bash", "Prompts");
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            BlockNode::Header {
                level: 1,
                content: "Prompts".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            BlockNode::Paragraph {
                lines: vec![r"The prompt \(PS2\) will be shown.".to_string()]
            }
        );
        assert_eq!(
            blocks[2],
            BlockNode::CodeBlock {
                language: "bash".to_string(),
                lines: vec!["echo $PS2".to_string()]
            }
        );
    }

    #[test]
    fn test_unknown_block_kind_is_kept() {
        let blocks = sample().get_document("C++", "Algorithms");
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[2],
            BlockNode::Unsupported {
                kind: "Blockquote".to_string()
            }
        );
        match &blocks[1] {
            BlockNode::Table { rows, .. } => assert_eq!(rows.len(), 2),
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_document_count() {
        assert_eq!(sample().document_count(), 4);
    }

    #[test]
    fn test_missing_blogs_field() {
        let library = JsonLibrary::from_json_str(r#"[{"language": "Go"}]"#).unwrap();
        assert_eq!(library.list_languages(), vec!["Go"]);
        assert!(library.list_titles("Go").is_empty());
    }

    #[test]
    fn test_bad_outer_shape_is_an_error() {
        let err = JsonLibrary::from_json_str(r#"{"language": "Go"}"#).unwrap_err();
        assert!(matches!(err, BlogmarkError::Json(_)));

        let err = JsonLibrary::from_json_str("not json").unwrap_err();
        assert!(matches!(err, BlogmarkError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = JsonLibrary::load(Path::new("/nonexistent/blog-lang.json")).unwrap_err();
        assert!(matches!(err, BlogmarkError::Library(_)));
        assert!(err.to_string().contains("/nonexistent/blog-lang.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("blogmark-library-{}.json", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let library = JsonLibrary::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(library.unwrap(), sample());
    }

    #[test]
    fn test_empty_library() {
        let library = JsonLibrary::from_json_str("[]").unwrap();
        assert!(library.list_languages().is_empty());
        assert_eq!(library, JsonLibrary::default());
    }
}
