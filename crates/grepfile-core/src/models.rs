//! Data types carried by the query stream.
//!
//! The service answers a query with newline-delimited JSON objects of the
//! shape `{ "type": ..., "message": ... }`. [`StreamMessage`] is the typed
//! form of one such object; [`SourceRecord`] is one search hit inside a
//! `sources` message.

use serde::{Deserialize, Serialize};

/// Ordered file paths returned by a query, in service order.
///
/// Paths are passed through as received: no deduplication, no sorting.
pub type QueryResult = Vec<String>;

/// A single search hit from the remote service.
///
/// Only `filepath` is consumed downstream; every other field is carried
/// through unvalidated and is `None` when the service omits it or sends
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    pub filepath: String,
    #[serde(default, rename = "linestart", alias = "lineStart")]
    pub line_start: Option<i64>,
    #[serde(default, rename = "lineend", alias = "lineEnd")]
    pub line_end: Option<i64>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// One classified record from the query stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// Progress chatter from the service. Observability only.
    Status(serde_json::Value),
    /// The terminal payload carrying search hits.
    Sources(Vec<SourceRecord>),
    /// A record whose `type` is neither `status` nor `sources`.
    Unknown {
        kind: String,
        message: serde_json::Value,
    },
}

impl StreamMessage {
    /// Wire tag for this message (`"status"`, `"sources"`, or the unknown tag).
    pub fn kind(&self) -> &str {
        match self {
            StreamMessage::Status(_) => "status",
            StreamMessage::Sources(_) => "sources",
            StreamMessage::Unknown { kind, .. } => kind,
        }
    }
}

/// Project `filepath` out of each record, preserving order.
pub fn filepaths(sources: &[SourceRecord]) -> QueryResult {
    sources.iter().map(|s| s.filepath.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_record_optional_fields_default() {
        let rec: SourceRecord = serde_json::from_str(r#"{"filepath":"a/b.ts"}"#).unwrap();
        assert_eq!(rec.filepath, "a/b.ts");
        assert_eq!(rec.repository, None);
        assert_eq!(rec.summary, None);
        assert_eq!(rec.line_start, None);
        assert_eq!(rec.line_end, None);
    }

    #[test]
    fn source_record_reads_line_range() {
        let rec: SourceRecord = serde_json::from_str(
            r#"{"repository":"o/r","remote":"github","branch":"main","filepath":"x.rs","linestart":3,"lineend":9,"summary":"s"}"#,
        )
        .unwrap();
        assert_eq!(rec.line_start, Some(3));
        assert_eq!(rec.line_end, Some(9));
        assert_eq!(rec.remote.as_deref(), Some("github"));
        assert_eq!(rec.summary.as_deref(), Some("s"));
    }

    #[test]
    fn source_record_accepts_null_pass_through_fields() {
        let rec: SourceRecord = serde_json::from_str(
            r#"{"repository":null,"remote":null,"branch":null,"filepath":"a/b.ts","linestart":null,"lineend":null,"summary":null}"#,
        )
        .unwrap();
        assert_eq!(rec.filepath, "a/b.ts");
        assert_eq!(rec.repository, None);
        assert_eq!(rec.summary, None);
    }

    #[test]
    fn filepaths_preserves_order_and_duplicates() {
        let recs: Vec<SourceRecord> = serde_json::from_str(
            r#"[{"filepath":"z.rs"},{"filepath":"a.rs"},{"filepath":"z.rs"}]"#,
        )
        .unwrap();
        assert_eq!(filepaths(&recs), vec!["z.rs", "a.rs", "z.rs"]);
    }
}
