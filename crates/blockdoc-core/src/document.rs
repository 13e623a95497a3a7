//! Block document model
//!
//! This module defines the block types the article editor produces. A
//! [`Document`] is a flat, ordered list of [`Block`]s; any structure inside a
//! block (list items, table rows) lives in that block's payload.
//!
//! The serde representation is the editor's native form:
//!
//! ```text
//! { "time": 1700000000000,
//!   "blocks": [ { "id": "a1", "type": "header", "data": { "text": "Title", "level": 2 } } ],
//!   "version": "2.28.2" }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// An article body while it is being edited
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Editor save timestamp (milliseconds), carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Blocks in render order
    pub blocks: Vec<Block>,

    /// Editor version string, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One top-level unit of article content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct Block {
    /// Editor-assigned block id
    pub id: Option<String>,

    /// Typed payload
    pub data: BlockData,

    /// Editor block tunes (alignment and similar), kept opaque
    pub tunes: Option<Value>,
}

impl Block {
    pub fn new(data: BlockData) -> Self {
        Self {
            id: None,
            data,
            tunes: None,
        }
    }

    pub fn header(text: impl Into<String>, level: u8) -> Self {
        Self::new(BlockData::Header(HeaderData {
            text: text.into(),
            level: Some(level.into()),
        }))
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockData::Paragraph(ParagraphData { text: text.into() }))
    }

    pub fn list(style: ListStyle, items: Vec<String>) -> Self {
        Self::new(BlockData::List(ListData { style, items }))
    }

    /// Wire `type` tag of this block
    pub fn kind(&self) -> &str {
        self.data.kind()
    }

    pub fn is_blank(&self) -> bool {
        self.data.is_blank()
    }
}

/// Block payload, discriminated by the wire `type` tag
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Header(HeaderData),
    Paragraph(ParagraphData),
    List(ListData),
    Checklist(ChecklistData),
    Quote(QuoteData),
    Code(CodeData),
    Table(TableData),
    /// Thematic break, no payload
    Delimiter,
    Image(ImageData),
    LinkTool(LinkToolData),
    Raw(RawData),

    /// Unknown `type`, or a known one whose payload did not decode.
    /// Renders to nothing and round-trips verbatim.
    Unsupported { kind: String, data: Value },
}

impl BlockData {
    pub fn kind(&self) -> &str {
        match self {
            BlockData::Header(_) => "header",
            BlockData::Paragraph(_) => "paragraph",
            BlockData::List(_) => "list",
            BlockData::Checklist(_) => "checklist",
            BlockData::Quote(_) => "quote",
            BlockData::Code(_) => "code",
            BlockData::Table(_) => "table",
            BlockData::Delimiter => "delimiter",
            BlockData::Image(_) => "image",
            BlockData::LinkTool(_) => "linkTool",
            BlockData::Raw(_) => "raw",
            BlockData::Unsupported { kind, .. } => kind,
        }
    }

    /// Check if this block carries no visible content
    pub fn is_blank(&self) -> bool {
        match self {
            BlockData::Header(h) => h.text.trim().is_empty(),
            BlockData::Paragraph(p) => p.text.trim().is_empty(),
            BlockData::List(l) => l.items.iter().all(|item| item.trim().is_empty()),
            BlockData::Checklist(c) => c.items.is_empty(),
            BlockData::Quote(q) => q.text.trim().is_empty() && q.caption().is_none(),
            BlockData::Code(c) => c.code.is_empty(),
            BlockData::Table(t) => t.content.is_empty(),
            BlockData::Delimiter => false,
            BlockData::Image(i) => i.file.url.is_empty(),
            BlockData::LinkTool(l) => l.link.is_empty(),
            BlockData::Raw(r) => r.html.trim().is_empty(),
            BlockData::Unsupported { .. } => true,
        }
    }

    fn from_wire(kind: String, data: Value) -> Self {
        let decoded = match kind.as_str() {
            "header" => decode(&data).map(BlockData::Header),
            "paragraph" => decode(&data).map(BlockData::Paragraph),
            "list" => decode(&data).map(BlockData::List),
            "checklist" => decode(&data).map(BlockData::Checklist),
            "quote" => decode(&data).map(BlockData::Quote),
            "code" => decode(&data).map(BlockData::Code),
            "table" => decode(&data).map(BlockData::Table),
            "delimiter" => Some(BlockData::Delimiter),
            "image" => decode(&data).map(BlockData::Image),
            "linkTool" => decode(&data).map(BlockData::LinkTool),
            "raw" => decode(&data).map(BlockData::Raw),
            _ => None,
        };

        decoded.unwrap_or(BlockData::Unsupported { kind, data })
    }

    fn into_wire(self) -> (String, Value) {
        let kind = self.kind().to_string();
        let data = match self {
            BlockData::Header(h) => encode(&h),
            BlockData::Paragraph(p) => encode(&p),
            BlockData::List(l) => encode(&l),
            BlockData::Checklist(c) => encode(&c),
            BlockData::Quote(q) => encode(&q),
            BlockData::Code(c) => encode(&c),
            BlockData::Table(t) => encode(&t),
            BlockData::Delimiter => Value::Object(Map::new()),
            BlockData::Image(i) => encode(&i),
            BlockData::LinkTool(l) => encode(&l),
            BlockData::Raw(r) => encode(&r),
            BlockData::Unsupported { data, .. } => data,
        };
        (kind, data)
    }
}

fn decode<T: DeserializeOwned>(data: &Value) -> Option<T> {
    T::deserialize(data).ok()
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn encode<T: Serialize>(data: &T) -> Value {
    // Payload structs have string keys only, so this cannot fail.
    serde_json::to_value(data).unwrap_or_default()
}

/// Wire shape of a block: `{ id?, type, data, tunes? }`
#[derive(Serialize, Deserialize)]
struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tunes: Option<Value>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Self {
            id: raw.id,
            data: BlockData::from_wire(raw.kind, raw.data),
            tunes: raw.tunes,
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        let (kind, data) = block.data.into_wire();
        Self {
            id: block.id,
            kind,
            data,
            tunes: block.tunes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: String,
    /// Any JSON number is accepted and kept as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Number>,
}

impl HeaderData {
    /// Resolve the level to render: absent, zero or negative falls back to
    /// `default`, fractions are truncated, anything above `max` is clamped
    /// to `max`.
    pub fn effective_level(&self, default: u8, max: u8) -> u8 {
        let max = max.max(1);
        let level = self
            .level
            .as_ref()
            .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
            .unwrap_or(0);

        if level < 1 {
            default.clamp(1, max)
        } else {
            level.min(i64::from(max)) as u8
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub style: ListStyle,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistData {
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl QuoteData {
    /// Caption to render; an empty caption counts as absent
    pub fn caption(&self) -> Option<&str> {
        non_empty(self.caption.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub content: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub file: ImageFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageData {
    pub fn caption(&self) -> Option<&str> {
        non_empty(self.caption.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub url: String,
}

/// Link preview card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToolData {
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: LinkMeta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<LinkImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub html: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
