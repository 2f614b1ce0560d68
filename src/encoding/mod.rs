//! Text encoding detection for raw file content.
//!
//! Given a whole byte buffer, the detector decides whether it can be read as
//! text and returns the decoded string, or reports it as binary. Decoding is
//! always strict: a candidate encoding either accepts every byte or is
//! skipped.
//!
//! Candidates are tried in this order:
//!
//! 1. the encoding announced by a byte order mark (UTF-8, UTF-32LE,
//!    UTF-16LE, UTF-16BE)
//! 2. UTF-8
//! 3. a zero byte in the first 32 KiB ends the search as binary
//! 4. ISO-8859-1 (static table)
//! 5. UTF-16LE without a byte order mark
//!
//! # Example
//!
//! ```
//! use shannon::encoding::{load, TextEncoding};
//!
//! let content = load(b"\xEF\xBB\xBFhello".to_vec());
//! assert_eq!(content.text(), Some("hello"));
//! assert_eq!(content.encoding(), Some(TextEncoding::Utf8));
//!
//! assert!(load(b"\xFF\x00\xC3".to_vec()).is_binary());
//! ```

pub mod bom;
pub mod decode;
pub mod detector;
pub mod types;

pub use self::bom::sniff_bom;
pub use self::decode::{
    decode_latin1, decode_utf16be, decode_utf16le, decode_utf32le, decode_utf8, DecodeFn,
};
pub use self::detector::{Candidate, TextDetector};
pub use self::types::{ContentKind, DecodedContent, TextEncoding};

use bytes::Bytes;

/// Classifies `data` with the default detector configuration.
pub fn load<B: Into<Bytes>>(data: B) -> DecodedContent {
    TextDetector::default().load(data)
}
