//! Text versus binary classification over a whole byte buffer.

use std::fmt;

use bytes::Bytes;
use tracing::{debug, debug_span, trace};

use crate::config::DetectorConfig;
use crate::encoding::bom::sniff_bom;
use crate::encoding::decode::DecodeFn;
use crate::encoding::types::{DecodedContent, TextEncoding};

/// One entry in the ordered list of encodings tried after byte order mark
/// sniffing.
#[derive(Clone, Copy)]
pub struct Candidate {
    pub encoding: TextEncoding,
    pub decode: DecodeFn,
    /// Tried only once the leading bytes are known to contain no zero byte.
    pub requires_no_nulls: bool,
}

impl Candidate {
    fn new(encoding: TextEncoding, requires_no_nulls: bool) -> Self {
        Self {
            encoding,
            decode: encoding.decoder(),
            requires_no_nulls,
        }
    }

    /// Runs this candidate's strict decoder over `data`.
    pub fn try_decode(&self, data: &[u8]) -> Option<String> {
        (self.decode)(data)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("encoding", &self.encoding)
            .field("requires_no_nulls", &self.requires_no_nulls)
            .finish()
    }
}

/// Classifies byte buffers as text (with the decoded string) or binary.
///
/// The detector holds no state besides its configuration and can be shared
/// freely.
#[derive(Debug, Clone, Default)]
pub struct TextDetector {
    config: DetectorConfig,
}

impl TextDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Encodings tried, in order, when no byte order mark settles the
    /// question.
    pub fn fallback_candidates(&self) -> Vec<Candidate> {
        let mut candidates = vec![Candidate::new(TextEncoding::Utf8, false)];
        if self.config.try_latin1 {
            candidates.push(Candidate::new(TextEncoding::Latin1, true));
        }
        if self.config.try_utf16le {
            candidates.push(Candidate::new(TextEncoding::Utf16Le, true));
        }
        candidates
    }

    /// Returns true if a zero byte appears within the scanned prefix.
    pub fn has_leading_null(&self, data: &[u8]) -> bool {
        let limit = data.len().min(self.config.null_scan_limit);
        memchr::memchr(0, &data[..limit]).is_some()
    }

    /// Classifies `data`.
    ///
    /// An empty buffer is empty text. Otherwise a byte order mark candidate
    /// is tried first, then the fallback candidates in order. A zero byte in
    /// the scanned prefix stops the search before any candidate that
    /// requires its absence. A non-empty buffer that decodes to an empty
    /// string is binary.
    pub fn load<B: Into<Bytes>>(&self, data: B) -> DecodedContent {
        let raw: Bytes = data.into();
        let span = debug_span!("detect", len = raw.len());
        let _guard = span.enter();

        if raw.is_empty() {
            debug!("Empty buffer, classified as empty text");
            return DecodedContent::Text {
                text: String::new(),
                encoding: TextEncoding::Utf8,
                raw,
            };
        }

        match self.detect(&raw) {
            Some((encoding, text)) if !text.is_empty() => {
                debug!(encoding = %encoding, text_len = text.len(), "Classified as text");
                DecodedContent::Text {
                    text,
                    encoding,
                    raw,
                }
            }
            _ => {
                debug!("Classified as binary");
                DecodedContent::Binary { raw }
            }
        }
    }

    /// Convenience for borrowed input; copies the bytes.
    pub fn load_slice(&self, data: &[u8]) -> DecodedContent {
        self.load(Bytes::copy_from_slice(data))
    }

    fn detect(&self, data: &[u8]) -> Option<(TextEncoding, String)> {
        for &encoding in sniff_bom(data) {
            if let Some(text) = encoding.decode(data) {
                return Some((encoding, text));
            }
            trace!(encoding = %encoding, "Byte order mark candidate rejected");
        }

        let mut null_checked = false;
        for candidate in self.fallback_candidates() {
            if candidate.requires_no_nulls && !null_checked {
                if self.has_leading_null(data) {
                    debug!(
                        scan_limit = self.config.null_scan_limit,
                        "Zero byte in leading bytes"
                    );
                    return None;
                }
                null_checked = true;
            }
            if let Some(text) = candidate.try_decode(data) {
                return Some((candidate.encoding, text));
            }
            trace!(encoding = %candidate.encoding, "Candidate rejected");
        }
        None
    }
}
