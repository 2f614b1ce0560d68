//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration suite: temporary files and byte
//! encodings of test strings.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
///
/// The file is removed when the returned handle is dropped.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Test encodings of strings
pub mod encode {
    pub fn utf8_with_bom(text: &str) -> Vec<u8> {
        let mut out = vec![0xEF, 0xBB, 0xBF];
        out.extend_from_slice(text.as_bytes());
        out
    }

    pub fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
        let mut out = vec![0xFF, 0xFE];
        out.extend(utf16le(text));
        out
    }

    pub fn utf16be_with_bom(text: &str) -> Vec<u8> {
        let mut out = vec![0xFE, 0xFF];
        out.extend(text.encode_utf16().flat_map(|u| u.to_be_bytes()));
        out
    }

    pub fn utf32le_with_bom(text: &str) -> Vec<u8> {
        let mut out = vec![0xFF, 0xFE, 0x00, 0x00];
        out.extend(text.chars().flat_map(|c| u32::from(c).to_le_bytes()));
        out
    }

    /// Latin-1 bytes; panics on chars above U+00FF.
    pub fn latin1(text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| u8::try_from(u32::from(c)).expect("not a Latin-1 char"))
            .collect()
    }
}
