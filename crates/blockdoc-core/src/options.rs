//! Configuration options for markup serialization

/// Options for markup serialization
///
/// The defaults reproduce the markup already stored for existing articles;
/// changing them changes the output for every block.
#[derive(Debug, Clone)]
pub struct Options {
    /// String placed between consecutive blocks
    pub block_separator: String,

    /// Heading level used when a header block has none (or 0)
    pub default_header_level: u8,

    /// Highest heading level the editor offers; deeper levels are clamped
    pub max_header_level: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            block_separator: "\n".to_string(),
            default_header_level: 2,
            max_header_level: 4,
        }
    }
}
