//! ContentConverter - the editor/storage boundary for article content.

use blockdoc_core::{serialize, try_parse_native, Document, Options};

use crate::parse::parse;
use crate::Result;

/// Converts article content between the editor's block documents and the
/// markup kept in a post's `content` field
pub struct ContentConverter {
    options: Options,
}

impl ContentConverter {
    /// Create a ContentConverter with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a ContentConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Render a document to markup
    pub fn to_markup(&self, document: &Document) -> String {
        serialize(document, &self.options)
    }

    /// Recover a document from stored content
    pub fn to_document(&self, content: &str) -> Document {
        parse(content)
    }

    /// Turn submitted editor content into the markup to store.
    ///
    /// Native form content is rendered; anything else is assumed to be
    /// markup already and is stored unchanged.
    pub fn prepare_for_storage(&self, content: &str) -> String {
        match try_parse_native(content) {
            Some(document) => {
                tracing::debug!(blocks = document.len(), "rendering native form for storage");
                self.to_markup(&document)
            }
            None => content.to_string(),
        }
    }

    /// Turn stored content into the native form handed to the editor
    pub fn prepare_for_editing(&self, stored: &str) -> Result<String> {
        let document = self.to_document(stored);
        tracing::debug!(blocks = document.len(), "prepared stored content for editing");
        Ok(document.to_json()?)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for ContentConverter {
    fn default() -> Self {
        Self::new()
    }
}
