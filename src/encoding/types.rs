//! Result types for text encoding detection.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character encodings the detector can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    /// ISO-8859-1, decoded through a static byte to code point table.
    Latin1,
}

impl TextEncoding {
    /// Canonical charset label.
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of running the detector over a byte buffer.
///
/// The original bytes are kept in both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedContent {
    /// The buffer decoded cleanly. An empty buffer is empty text.
    Text {
        text: String,
        encoding: TextEncoding,
        raw: Bytes,
    },
    /// No candidate encoding accepted the buffer.
    Binary { raw: Bytes },
}

impl DecodedContent {
    /// Number of bytes in the original buffer.
    pub fn byte_count(&self) -> usize {
        self.raw().len()
    }

    /// The original bytes, whatever the classification.
    pub fn raw(&self) -> &Bytes {
        match self {
            DecodedContent::Text { raw, .. } | DecodedContent::Binary { raw } => raw,
        }
    }

    /// The decoded string, if the buffer was classified as text.
    pub fn text(&self) -> Option<&str> {
        match self {
            DecodedContent::Text { text, .. } => Some(text),
            DecodedContent::Binary { .. } => None,
        }
    }

    /// The winning encoding, if the buffer was classified as text.
    pub fn encoding(&self) -> Option<TextEncoding> {
        match self {
            DecodedContent::Text { encoding, .. } => Some(*encoding),
            DecodedContent::Binary { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DecodedContent::Text { .. })
    }

    pub fn is_binary(&self) -> bool {
        !self.is_text()
    }

    /// True for the zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.raw().is_empty()
    }

    /// Short label for reports: `text`, `binary` or `empty`.
    pub fn kind(&self) -> ContentKind {
        match self {
            _ if self.is_empty() => ContentKind::Empty,
            DecodedContent::Text { .. } => ContentKind::Text,
            DecodedContent::Binary { .. } => ContentKind::Binary,
        }
    }
}

/// Coarse classification of loaded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Binary,
    Empty,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentKind::Text => "TEXT",
            ContentKind::Binary => "BINARY",
            ContentKind::Empty => "EMPTY",
        };
        f.write_str(label)
    }
}
