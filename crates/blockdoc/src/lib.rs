//! # blockdoc
//!
//! Convert article content between the editor's block documents and the
//! markup stored for each blog post.
//!
//! ## Design
//!
//! Posts store a single markup string. The editor works on a list of typed
//! blocks. This crate sits between the two:
//!
//! - **Saving**: blocks are rendered with fixed markup per block type
//!   (see [`blockdoc_core::serialize`]).
//! - **Opening for edit**: native form JSON round-trips exactly; stored
//!   markup is segmented best-effort into headings, paragraphs and lists.
//!
//! ## Example
//!
//! ```rust
//! use blockdoc::{parse, ContentConverter};
//!
//! let doc = parse("<h2>Title</h2><p>Body</p>");
//! assert_eq!(doc.len(), 2);
//!
//! let converter = ContentConverter::new();
//! assert_eq!(converter.to_markup(&doc), "<h2>Title</h2>\n<p>Body</p>");
//! ```

mod parse;
mod service;
mod utilities;

pub use blockdoc_core::*;
pub use parse::{parse, parse_markup, parse_opt};
pub use service::ContentConverter;
pub use utilities::*;

/// Error type for blockdoc operations
#[derive(Debug, thiserror::Error)]
pub enum BlockdocError {
    #[error("Native form error: {0}")]
    NativeForm(#[from] NativeFormError),
}

pub type Result<T> = std::result::Result<T, BlockdocError>;
