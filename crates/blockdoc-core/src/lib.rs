//! blockdoc-core - block document model and markup serialization
//!
//! This crate provides the document model produced by the article editor
//! and its conversion to the markup stored as a post's content. It is used
//! by `blockdoc`, which adds the reverse direction (markup back to blocks).
//!
//! # Architecture
//!
//! ```text
//!                   ┌──────────────┐ ──serialize──▶ Markup String
//! Native JSON ◀───▶ │   Document   │
//!                   └──────────────┘ ◀──blockdoc::parse── Markup String
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockdoc_core::{to_html, Block, Document, ListStyle};
//!
//! let doc = Document::from_blocks(vec![
//!     Block::header("Grid-scale storage", 2),
//!     Block::paragraph("Lithium iron phosphate dominates new installs."),
//!     Block::list(ListStyle::Unordered, vec!["LFP".to_string(), "NMC".to_string()]),
//! ]);
//!
//! let markup = to_html(&doc);
//! assert!(markup.starts_with("<h2>Grid-scale storage</h2>\n<p>"));
//! ```

mod document;
mod native;
mod options;
mod serialize;

pub use document::{
    Block, BlockData, ChecklistData, ChecklistItem, CodeData, Document, HeaderData, ImageData,
    ImageFile, LinkImage, LinkMeta, LinkToolData, ListData, ListStyle, ParagraphData, QuoteData,
    RawData, TableData,
};
pub use native::{looks_native, try_parse_native};
pub use options::Options;
pub use serialize::{serialize, to_html};

/// Error type for native form encoding and decoding
#[derive(Debug, thiserror::Error)]
pub enum NativeFormError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has no `blocks` array")]
    MissingBlocks,
}
