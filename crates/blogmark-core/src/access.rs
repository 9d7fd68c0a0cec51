//! Read interface over a store of documents.

use crate::block::BlockNode;

/// Supplies languages, titles and documents to the renderer.
///
/// Every lookup degrades to an empty result on a missing key; none of these
/// operations can fail.
pub trait DataAccess {
    /// All language names, in store order.
    fn list_languages(&self) -> Vec<String>;

    /// Titles written under `language`. Empty if the language is unknown.
    fn list_titles(&self, language: &str) -> Vec<String>;

    /// Blocks of the document `title` under `language`. Empty if either is unknown.
    fn get_document(&self, language: &str, title: &str) -> Vec<BlockNode>;
}

impl<T: DataAccess + ?Sized> DataAccess for &T {
    fn list_languages(&self) -> Vec<String> {
        (**self).list_languages()
    }

    fn list_titles(&self, language: &str) -> Vec<String> {
        (**self).list_titles(language)
    }

    fn get_document(&self, language: &str, title: &str) -> Vec<BlockNode> {
        (**self).get_document(language, title)
    }
}
