//! Strict candidate decoders.
//!
//! Every decoder takes the bytes without any byte order mark and returns
//! `None` on the first malformed sequence. No replacement characters are
//! ever produced.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::encoding::types::TextEncoding;

/// Signature shared by all candidate decoders.
pub type DecodeFn = fn(&[u8]) -> Option<String>;

fn decode_strict(encoding: &'static Encoding, data: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
}

/// Strict UTF-8. Plain ASCII is a subset.
pub fn decode_utf8(data: &[u8]) -> Option<String> {
    decode_strict(UTF_8, data)
}

/// Strict UTF-16 little endian. Odd lengths and unpaired surrogates fail.
pub fn decode_utf16le(data: &[u8]) -> Option<String> {
    decode_strict(UTF_16LE, data)
}

/// Strict UTF-16 big endian.
pub fn decode_utf16be(data: &[u8]) -> Option<String> {
    decode_strict(UTF_16BE, data)
}

/// Strict UTF-32 little endian.
///
/// Lengths that are not a multiple of four, surrogate code points and
/// values above U+10FFFF fail.
pub fn decode_utf32le(data: &[u8]) -> Option<String> {
    if data.len() % 4 != 0 {
        return None;
    }
    data.chunks_exact(4)
        .map(|unit| char::from_u32(u32::from_le_bytes([unit[0], unit[1], unit[2], unit[3]])))
        .collect()
}

/// ISO-8859-1 through a static table: every byte maps to the code point of
/// the same value, so this never fails.
pub fn decode_latin1(data: &[u8]) -> Option<String> {
    Some(data.iter().copied().map(char::from).collect())
}

impl TextEncoding {
    /// Strict decoder for this encoding (byte order mark not included).
    pub fn decoder(self) -> DecodeFn {
        match self {
            TextEncoding::Utf8 => decode_utf8,
            TextEncoding::Utf16Le => decode_utf16le,
            TextEncoding::Utf16Be => decode_utf16be,
            TextEncoding::Utf32Le => decode_utf32le,
            TextEncoding::Latin1 => decode_latin1,
        }
    }

    /// Strictly decodes `data`, skipping this encoding's byte order mark
    /// when present.
    pub fn decode(self, data: &[u8]) -> Option<String> {
        let body = data.strip_prefix(self.bom()).unwrap_or(data);
        (self.decoder())(body)
    }
}
