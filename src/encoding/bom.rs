//! Byte order mark sniffing.

use crate::encoding::types::TextEncoding;

pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
pub const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
pub const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];
pub const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];

/// Longest byte order mark, in bytes.
pub const MAX_BOM_LEN: usize = 4;

impl TextEncoding {
    /// Byte order mark for this encoding; empty when it has none.
    pub fn bom(self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => UTF8_BOM,
            TextEncoding::Utf16Le => UTF16LE_BOM,
            TextEncoding::Utf16Be => UTF16BE_BOM,
            TextEncoding::Utf32Le => UTF32LE_BOM,
            TextEncoding::Latin1 => &[],
        }
    }
}

/// Returns the encodings announced by a leading byte order mark, most
/// specific first.
///
/// `FF FE 00 00` is both the UTF-32LE mark and a UTF-16LE mark followed by
/// U+0000, so both are returned in that order. No mark yields an empty slice.
pub fn sniff_bom(data: &[u8]) -> &'static [TextEncoding] {
    let head = &data[..data.len().min(MAX_BOM_LEN)];
    if head.starts_with(UTF8_BOM) {
        &[TextEncoding::Utf8]
    } else if head.starts_with(UTF32LE_BOM) {
        &[TextEncoding::Utf32Le, TextEncoding::Utf16Le]
    } else if head.starts_with(UTF16LE_BOM) {
        &[TextEncoding::Utf16Le]
    } else if head.starts_with(UTF16BE_BOM) {
        &[TextEncoding::Utf16Be]
    } else {
        &[]
    }
}
