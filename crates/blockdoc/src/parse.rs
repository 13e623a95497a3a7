//! Markup to document parsing.
//!
//! Stored article content is either the editor's native JSON form or
//! rendered markup. Native form round-trips exactly. Markup goes through a
//! best-effort segmenter that only recovers headings, paragraphs and lists;
//! tables, checklists, quotes, images, link previews, code, raw HTML and
//! delimiters are not reconstructed from markup.
//!
//! The segmenter is a fixed, regex-based scan over legacy content, not an
//! HTML parser. Its precedence (heading, paragraph, ordered list, unordered
//! list) and its case handling decide how existing articles open in the
//! editor, so changing them changes observable behavior.

use blockdoc_core::{try_parse_native, Block, Document, ListStyle};
use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level wrappers, matched case-insensitively and never across a newline
static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<h[1-6]>.*?</h[1-6]>|<p>.*?</p>|<ul>.*?</ul>|<ol>.*?</ol>").unwrap()
});

static HEADING_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<h([1-6])>").unwrap());

static HEADING_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?h[1-6]>").unwrap());

static PARAGRAPH_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?p>").unwrap());

static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li>(.*?)</li>").unwrap());

/// Parse stored content into a document.
///
/// Never fails: empty input gives an empty document, native form input is
/// returned as encoded, and anything else is segmented heuristically.
pub fn parse(content: &str) -> Document {
    if content.is_empty() {
        return Document::new();
    }

    if let Some(document) = try_parse_native(content) {
        return document;
    }

    parse_markup(content)
}

/// Parse content that may be absent
pub fn parse_opt(content: Option<&str>) -> Document {
    content.map(parse).unwrap_or_default()
}

/// Heuristically segment markup into blocks, skipping the native form check
pub fn parse_markup(markup: &str) -> Document {
    let pieces = split_segments(markup);
    tracing::trace!(pieces = pieces.len(), "segmented markup");

    let blocks = pieces
        .into_iter()
        .filter_map(classify)
        .filter(|block| !block.is_blank())
        .collect();

    Document::from_blocks(blocks)
}

/// Split markup into matched wrapper segments and the residue between them,
/// in order of appearance. Blank pieces are dropped.
fn split_segments(markup: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for segment in SEGMENT_RE.find_iter(markup) {
        pieces.push(&markup[last..segment.start()]);
        pieces.push(segment.as_str());
        last = segment.end();
    }
    pieces.push(&markup[last..]);

    pieces.retain(|piece| !piece.trim().is_empty());
    pieces
}

/// Turn one piece into a block.
///
/// Opening tags are matched case-sensitively here, so an upper-case
/// wrapper found by the segmenter falls through to a verbatim paragraph.
fn classify(piece: &str) -> Option<Block> {
    if let Some(caps) = HEADING_OPEN_RE.captures(piece) {
        let level = caps[1].parse().unwrap_or(2);
        let text = HEADING_TAG_RE.replace_all(piece, "");
        return Some(Block::header(text, level));
    }

    if piece.starts_with("<p>") {
        let text = PARAGRAPH_TAG_RE.replace_all(piece, "");
        return Some(Block::paragraph(text));
    }

    if piece.starts_with("<ul>") || piece.starts_with("<ol>") {
        let style = if piece.starts_with("<ol>") {
            ListStyle::Ordered
        } else {
            ListStyle::Unordered
        };
        let items = LIST_ITEM_RE
            .captures_iter(piece)
            .map(|caps| caps[1].to_string())
            .collect();
        return Some(Block::list(style, items));
    }

    // Stray closing tags left between segments carry no content.
    if piece.starts_with("</") {
        return None;
    }

    Some(Block::paragraph(piece.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdoc_core::{BlockData, HeaderData, ListData, ParagraphData};

    fn header(text: &str, level: u8) -> BlockData {
        BlockData::Header(HeaderData {
            text: text.to_string(),
            level: Some(level.into()),
        })
    }

    fn paragraph(text: &str) -> BlockData {
        BlockData::Paragraph(ParagraphData {
            text: text.to_string(),
        })
    }

    fn data(document: &Document) -> Vec<BlockData> {
        document.blocks.iter().map(|b| b.data.clone()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse_opt(None).is_empty());
        assert!(parse_opt(Some("")).is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(parse("  \n\t ").is_empty());
    }

    #[test]
    fn test_heading_then_paragraph() {
        let doc = parse("<h2>Title</h2><p>Body</p>");
        assert_eq!(data(&doc), vec![header("Title", 2), paragraph("Body")]);
    }

    #[test]
    fn test_heading_levels_carried_through() {
        let doc = parse("<h1>A</h1><h6>F</h6>");
        assert_eq!(data(&doc), vec![header("A", 1), header("F", 6)]);
    }

    #[test]
    fn test_lists() {
        let doc = parse("<ol><li>a</li><li>b</li></ol>\n<ul><li>c</li></ul>");
        assert_eq!(
            data(&doc),
            vec![
                BlockData::List(ListData {
                    style: ListStyle::Ordered,
                    items: vec!["a".to_string(), "b".to_string()],
                }),
                BlockData::List(ListData {
                    style: ListStyle::Unordered,
                    items: vec!["c".to_string()],
                }),
            ]
        );
    }

    #[test]
    fn test_list_without_items_is_dropped() {
        assert!(parse("<ul></ul>").is_empty());
        assert!(parse("<ol>loose text</ol>").is_empty());
    }

    #[test]
    fn test_list_with_only_blank_items_is_dropped() {
        assert!(parse("<ul><li> </li></ul>").is_empty());
        assert!(parse("<ol><li></li><li>\t</li></ol>").is_empty());
    }

    #[test]
    fn test_unmatched_text_becomes_paragraph() {
        let doc = parse("  just some text  ");
        assert_eq!(data(&doc), vec![paragraph("just some text")]);
    }

    #[test]
    fn test_residue_between_segments() {
        let doc = parse("<p>One</p> loose <p>Two</p>");
        assert_eq!(
            data(&doc),
            vec![paragraph("One"), paragraph("loose"), paragraph("Two")]
        );
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let doc = parse("<p></p>\n<p>   </p>\n<p>Kept</p>");
        assert_eq!(data(&doc), vec![paragraph("Kept")]);
    }

    #[test]
    fn test_empty_heading_dropped() {
        assert!(parse("<h2></h2>").is_empty());
    }

    #[test]
    fn test_paragraph_text_is_not_trimmed() {
        let doc = parse("<p> spaced </p>");
        assert_eq!(data(&doc), vec![paragraph(" spaced ")]);
    }

    #[test]
    fn test_inline_markup_kept() {
        let doc = parse("<p>Use <strong>LFP</strong> cells</p>");
        assert_eq!(data(&doc), vec![paragraph("Use <strong>LFP</strong> cells")]);
    }

    #[test]
    fn test_stray_closing_tag_dropped() {
        let doc = parse("</div><p>Body</p>");
        assert_eq!(data(&doc), vec![paragraph("Body")]);
    }

    #[test]
    fn test_uppercase_wrapper_kept_verbatim() {
        let doc = parse("<H2>Title</H2>");
        assert_eq!(data(&doc), vec![paragraph("<H2>Title</H2>")]);
    }

    #[test]
    fn test_complex_blocks_become_paragraphs() {
        let doc = parse("<blockquote>Quote<cite>Someone</cite></blockquote>\n<hr>");
        assert_eq!(
            data(&doc),
            vec![paragraph(
                "<blockquote>Quote<cite>Someone</cite></blockquote>\n<hr>"
            )]
        );
    }

    #[test]
    fn test_segments_do_not_cross_lines() {
        let doc = parse("<p>first\nsecond</p>");
        assert_eq!(data(&doc), vec![paragraph("first\nsecond")]);
    }

    #[test]
    fn test_heading_inside_paragraph() {
        // Leftmost match wins: the paragraph segment swallows the heading.
        let doc = parse("<p>intro <h3>Sub</h3></p>");
        assert_eq!(data(&doc), vec![paragraph("intro <h3>Sub</h3>")]);
    }

    #[test]
    fn test_native_form_passthrough() {
        let json = r#"{"blocks":[{"type":"quote","data":{"text":"q","caption":"c"}}]}"#;
        let doc = parse(json);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks[0].kind(), "quote");
    }

    #[test]
    fn test_malformed_native_form_falls_back() {
        let doc = parse(r#"{"time": 1}"#);
        assert_eq!(data(&doc), vec![paragraph(r#"{"time": 1}"#)]);
    }
}
