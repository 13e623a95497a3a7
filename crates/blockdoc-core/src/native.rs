//! Native form encoding
//!
//! The editor hands documents around as JSON (`{"blocks": [...]}`). Stored
//! article content is usually markup instead, so decoding the native form is
//! an expected, frequent miss: [`try_parse_native`] reports it as `None`
//! rather than an error.

use crate::document::Document;
use crate::NativeFormError;

impl Document {
    /// Strictly decode the native form.
    ///
    /// The input must be a JSON object with a `blocks` array whose entries
    /// are objects carrying a string `type`.
    pub fn from_json(input: &str) -> Result<Self, NativeFormError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        if !value.get("blocks").is_some_and(|blocks| blocks.is_array()) {
            return Err(NativeFormError::MissingBlocks);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Encode this document in the native form
    pub fn to_json(&self) -> Result<String, NativeFormError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Cheap pre-check for native form input
pub fn looks_native(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

/// Decode `input` as a native form document, if it is one
pub fn try_parse_native(input: &str) -> Option<Document> {
    if !looks_native(input) {
        return None;
    }

    match Document::from_json(input) {
        Ok(document) => Some(document),
        Err(err) => {
            tracing::debug!(error = %err, "input is not a native form document");
            None
        }
    }
}
