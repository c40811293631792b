//! Newline-delimited record framing.
//!
//! Transport chunks arrive with arbitrary boundaries. [`FrameDecoder`]
//! accumulates bytes and only releases records whose terminating `\n` has
//! been seen, so the records produced are the same no matter how the stream
//! was split.
//!
//! ```rust
//! use grepfile_core::frame::FrameDecoder;
//!
//! let mut decoder = FrameDecoder::new();
//! assert!(decoder.feed(b"{\"type\":\"sta").is_empty());
//! let records = decoder.feed(b"tus\"}\n\n{\"type\":");
//! assert_eq!(records, vec![r#"{"type":"status"}"#.to_string()]);
//! assert_eq!(decoder.buffered(), 8);
//! ```
//!
//! A chunk without any newline grows the buffer until one arrives. The
//! service emits a newline after every record, so the buffer stays small in
//! practice.
//!
//! A complete line that is not valid UTF-8 is dropped rather than repaired,
//! so a corrupted path can never come out as a different, plausible one.
//! [`FrameDecoder::take_invalid`] reports how many were dropped.

/// Incremental splitter for newline-delimited records.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
    invalid: usize,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every record completed by it.
    ///
    /// Everything up to and including the last `\n` in the combined buffer is
    /// complete; the remainder is retained. Blank and whitespace-only lines
    /// are dropped, and a trailing `\r` is stripped from each record.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let last_newline = match self.buffer.iter().rposition(|&b| b == b'\n') {
            Some(pos) => pos,
            None => return Vec::new(),
        };

        let complete: Vec<u8> = self.buffer.drain(..=last_newline).collect();
        let mut records = Vec::new();
        for line in complete.split(|&b| b == b'\n') {
            match std::str::from_utf8(line) {
                Ok(text) => {
                    if let Some(record) = non_blank(text) {
                        records.push(record);
                    }
                }
                Err(_) => self.invalid += 1,
            }
        }
        records
    }

    /// Number of lines dropped as invalid UTF-8 since the last call.
    pub fn take_invalid(&mut self) -> usize {
        std::mem::take(&mut self.invalid)
    }

    /// Take the unterminated tail, if it holds anything but whitespace.
    ///
    /// The tail is never a complete record; callers that want to inspect it
    /// at end of stream can do so here. The buffer is empty afterwards.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        match std::str::from_utf8(&rest) {
            Ok(text) => non_blank(text),
            Err(_) => {
                self.invalid += 1;
                None
            }
        }
    }

    /// Number of bytes waiting for a terminating newline.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

fn non_blank(line: &str) -> Option<String> {
    let text = line.trim_end_matches('\r');
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
