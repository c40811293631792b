//! Record classification.
//!
//! Turns one framed record into a [`StreamMessage`]. A `sources` record is
//! all-or-nothing: if any entry in its array is malformed the whole record
//! fails with [`ParseError::Sources`].

use serde::Deserialize;

use crate::error::ParseError;
use crate::models::{SourceRecord, StreamMessage};

#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    message: serde_json::Value,
}

/// Classify a single newline-delimited record.
pub fn classify(record: &str) -> Result<StreamMessage, ParseError> {
    let raw: RawRecord = serde_json::from_str(record)?;
    let kind = raw.kind.ok_or(ParseError::MissingType)?;

    match kind.as_str() {
        "sources" => {
            let sources: Vec<SourceRecord> =
                serde_json::from_value(raw.message).map_err(ParseError::Sources)?;
            Ok(StreamMessage::Sources(sources))
        }
        "status" => Ok(StreamMessage::Status(raw.message)),
        _ => Ok(StreamMessage::Unknown {
            kind,
            message: raw.message,
        }),
    }
}
