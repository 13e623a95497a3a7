//! Markup serialization
//!
//! Converts a block [`Document`] into the HTML string stored as an article's
//! content. The markup for every block type is fixed: stored articles and
//! the public article renderer depend on it byte for byte. No escaping is
//! performed; block text is already editor-produced inline HTML.

use crate::document::{
    Block, BlockData, ChecklistData, Document, HeaderData, ImageData, LinkToolData, ListData,
    ListStyle, QuoteData, TableData,
};
use crate::options::Options;

/// Serialize a document to markup
pub fn serialize(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(estimate_capacity(document));

    for (i, block) in document.blocks.iter().enumerate() {
        if i > 0 {
            output.push_str(&options.block_separator);
        }
        serialize_block(block, options, &mut output);
    }

    output
}

/// Serialize a document to markup with default options
pub fn to_html(document: &Document) -> String {
    serialize(document, &Options::default())
}

fn estimate_capacity(document: &Document) -> usize {
    document.blocks.len() * 64
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match &block.data {
        BlockData::Header(header) => serialize_header(header, options, out),

        BlockData::Paragraph(paragraph) => wrap("p", &paragraph.text, out),

        BlockData::List(list) => serialize_list(list, out),

        BlockData::Checklist(checklist) => serialize_checklist(checklist, out),

        BlockData::Quote(quote) => serialize_quote(quote, out),

        BlockData::Code(code) => {
            out.push_str("<pre><code>");
            out.push_str(&code.code);
            out.push_str("</code></pre>");
        }

        BlockData::Table(table) => serialize_table(table, out),

        BlockData::Delimiter => out.push_str("<hr>"),

        BlockData::Image(image) => serialize_image(image, out),

        BlockData::LinkTool(link) => serialize_link_tool(link, out),

        BlockData::Raw(raw) => out.push_str(&raw.html),

        BlockData::Unsupported { kind, .. } => {
            tracing::debug!(kind = %kind, id = ?block.id, "skipping unsupported block");
        }
    }
}

fn wrap(tag: &str, content: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn serialize_header(header: &HeaderData, options: &Options, out: &mut String) {
    let level = header.effective_level(options.default_header_level, options.max_header_level);
    let tag = format!("h{level}");
    wrap(&tag, &header.text, out);
}

fn serialize_list(list: &ListData, out: &mut String) {
    let tag = match list.style {
        ListStyle::Ordered => "ol",
        ListStyle::Unordered => "ul",
    };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in &list.items {
        wrap("li", item, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn serialize_checklist(checklist: &ChecklistData, out: &mut String) {
    out.push_str("<div class=\"checklist\">");
    for item in &checklist.items {
        // Whitespace inside each item matches markup already in storage.
        out.push_str("<div class=\"checklist-item\">\n            <input type=\"checkbox\" ");
        if item.checked {
            out.push_str("checked");
        }
        out.push_str(" disabled>\n            <span>");
        out.push_str(&item.text);
        out.push_str("</span>\n          </div>");
    }
    out.push_str("</div>");
}

fn serialize_quote(quote: &QuoteData, out: &mut String) {
    out.push_str("<blockquote>");
    out.push_str(&quote.text);
    if let Some(caption) = quote.caption() {
        wrap("cite", caption, out);
    }
    out.push_str("</blockquote>");
}

fn serialize_table(table: &TableData, out: &mut String) {
    out.push_str("<table class=\"editor-table\"><tbody>");
    for row in &table.content {
        out.push_str("<tr>");
        for cell in row {
            wrap("td", cell, out);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn serialize_image(image: &ImageData, out: &mut String) {
    let caption = image.caption();

    out.push_str("<figure><img src=\"");
    out.push_str(&image.file.url);
    out.push_str("\" alt=\"");
    out.push_str(caption.unwrap_or(""));
    out.push_str("\">");
    if let Some(caption) = caption {
        wrap("figcaption", caption, out);
    }
    out.push_str("</figure>");
}

fn serialize_link_tool(link: &LinkToolData, out: &mut String) {
    let meta = &link.meta;

    out.push_str("<a href=\"");
    out.push_str(&link.link);
    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">\n");
    out.push_str("          <div class=\"link-preview\">\n");
    out.push_str("            ");
    if let Some(url) = meta.image.as_ref().and_then(|image| image.url.as_deref()) {
        out.push_str("<img src=\"");
        out.push_str(url);
        out.push_str("\" alt=\"\">");
    }
    out.push('\n');
    out.push_str("            <div>\n");
    out.push_str("              ");
    wrap("h4", &meta.title, out);
    out.push('\n');
    out.push_str("              ");
    wrap("p", &meta.description, out);
    out.push('\n');
    out.push_str("              ");
    wrap("span", &link.link, out);
    out.push('\n');
    out.push_str("            </div>\n");
    out.push_str("          </div>\n");
    out.push_str("        </a>");
}
