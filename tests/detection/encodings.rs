//! Encoding detection over complete buffers.

use shannon::config::DetectorConfig;
use shannon::encoding::{load, TextDetector, TextEncoding};

use crate::common::encode::*;

const SAMPLE: &str = "Shannon: H = -Σ p log p\nΑλφάβητο, façade, 𝄞";

#[test]
fn test_bom_round_trips() {
    let cases = vec![
        (utf8_with_bom(SAMPLE), TextEncoding::Utf8),
        (utf16le_with_bom(SAMPLE), TextEncoding::Utf16Le),
        (utf16be_with_bom(SAMPLE), TextEncoding::Utf16Be),
        (utf32le_with_bom(SAMPLE), TextEncoding::Utf32Le),
    ];

    for (data, expected) in cases {
        let len = data.len();
        let content = load(data);
        assert_eq!(content.encoding(), Some(expected), "{}", expected);
        assert_eq!(content.text(), Some(SAMPLE), "{}", expected);
        assert_eq!(content.byte_count(), len);
    }
}

#[test]
fn test_unmarked_utf8() {
    let content = load(SAMPLE.as_bytes().to_vec());
    assert_eq!(content.encoding(), Some(TextEncoding::Utf8));
    assert_eq!(content.text(), Some(SAMPLE));
}

#[test]
fn test_line_endings_preserved() {
    let text = "one\r\ntwo\rthree\n";
    let content = load(text.as_bytes().to_vec());
    assert_eq!(content.text(), Some(text));
}

#[test]
fn test_unmarked_latin1() {
    let text = "Größe: 12 µm, déjà vu";
    let content = load(latin1(text));
    assert_eq!(content.encoding(), Some(TextEncoding::Latin1));
    assert_eq!(content.text(), Some(text));
}

#[test]
fn test_unmarked_utf16le() {
    // ASCII in UTF-16LE is valid UTF-8 with zero bytes, so UTF-8 wins.
    let content = load(utf16le("ab"));
    assert_eq!(content.encoding(), Some(TextEncoding::Utf8));
    assert_eq!(content.text(), Some("a\0b\0"));

    // Latin-range UTF-16LE is not UTF-8 and its zero bytes end the search.
    assert!(load(utf16le("éà")).is_binary());
}

#[test]
fn test_embedded_zero_is_binary() {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D]);
    let content = load(data.clone());
    assert!(content.is_binary());
    assert_eq!(content.text(), None);
    assert_eq!(content.raw().as_ref(), data.as_slice());
}

#[test]
fn test_zero_past_scan_window_reaches_latin1() {
    let mut data = vec![0xE9; 32 * 1024];
    data.push(0x00);
    let content = load(data);
    assert_eq!(content.encoding(), Some(TextEncoding::Latin1));

    let mut data = vec![0xE9; 32 * 1024 - 1];
    data.push(0x00);
    assert!(load(data).is_binary());
}

#[test]
fn test_empty_buffer_is_empty_text() {
    let content = load(Vec::new());
    assert!(content.is_text());
    assert_eq!(content.text(), Some(""));
    assert!(content.is_empty());
}

#[test]
fn test_strict_utf16_rejects_garbage_after_bom() {
    // UTF-16BE BOM, then an odd trailing byte and a zero byte
    let content = load(vec![0xFE, 0xFF, 0x00, 0x41, 0x00]);
    assert!(content.is_binary());
}

#[test]
fn test_failed_bom_decode_falls_through() {
    // UTF-16LE BOM, then an unpaired high surrogate: no zero byte anywhere
    let data = vec![0xFF, 0xFE, 0x34, 0xD8, 0x41, 0x42];
    let content = load(data.clone());
    assert_eq!(content.encoding(), Some(TextEncoding::Latin1));
    assert_eq!(content.text(), Some("\u{ff}\u{fe}4\u{d8}AB"));
    assert_eq!(content.raw().as_ref(), data.as_slice());

    let detector = TextDetector::new(DetectorConfig {
        try_latin1: false,
        try_utf16le: false,
        ..DetectorConfig::default()
    });
    assert!(detector.load(data).is_binary());
}

#[test]
fn test_odd_length_utf16be_falls_through() {
    // FE and FF never occur in UTF-8, so Latin-1 takes it.
    let content = load(vec![0xFE, 0xFF, b'a', b'b', b'c']);
    assert_eq!(content.encoding(), Some(TextEncoding::Latin1));
    assert_eq!(content.text(), Some("\u{fe}\u{ff}abc"));
}

#[test]
fn test_legacy_candidates_disabled() {
    let detector = TextDetector::new(DetectorConfig {
        try_latin1: false,
        try_utf16le: false,
        ..DetectorConfig::default()
    });
    assert!(detector.load(latin1("déjà")).is_binary());
    assert!(detector.load(SAMPLE.as_bytes().to_vec()).is_text());
}
