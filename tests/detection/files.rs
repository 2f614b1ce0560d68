//! Loading files from disk and analysing them end to end.

use shannon::analysis::{analyze_path, InputMode};
use shannon::encoding::{ContentKind, TextDetector, TextEncoding};
use shannon::error::ShannonError;
use shannon::io::error::IoError;
use shannon::io::{IOLimits, LoadedFile};
use shannon::AnalysisConfig;

use crate::common::create_temp_file;
use crate::common::encode::*;

#[test]
fn test_text_file_counts_chars() {
    let file = create_temp_file(&utf8_with_bom("ABCD"));
    let analysis = analyze_path(file.path(), InputMode::Text, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.content, ContentKind::Text);
    assert_eq!(analysis.encoding, Some(TextEncoding::Utf8));
    assert_eq!(analysis.byte_count, 7);
    assert_eq!(analysis.counted, InputMode::Text);
    assert_eq!(analysis.report.length, 4);
    assert_eq!(analysis.report.result, 2.0);
}

#[test]
fn test_binary_mode_counts_bytes() {
    let file = create_temp_file(&utf8_with_bom("ABCD"));
    let analysis =
        analyze_path(file.path(), InputMode::Binary, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.content, ContentKind::Text);
    assert_eq!(analysis.encoding, Some(TextEncoding::Utf8));
    assert_eq!(analysis.counted, InputMode::Binary);
    assert_eq!(analysis.report.length, 7);
    assert_eq!(analysis.report.letter_count, 7);
}

#[test]
fn test_binary_file_falls_back_to_bytes() {
    let data: Vec<u8> = (0..=255).collect();
    let file = create_temp_file(&data);
    let analysis = analyze_path(file.path(), InputMode::Text, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.content, ContentKind::Binary);
    assert_eq!(analysis.counted, InputMode::Binary);
    assert_eq!(analysis.report.letter_count, 256);
    assert!((analysis.report.result - 8.0).abs() < 1e-12);
}

#[test]
fn test_empty_file() {
    let file = create_temp_file(b"");
    let analysis = analyze_path(file.path(), InputMode::Text, &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.content, ContentKind::Empty);
    assert_eq!(analysis.report.length, 0);
    assert!(analysis.report.result.is_nan());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyze_path(
        dir.path().join("nope.bin"),
        InputMode::Text,
        &AnalysisConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ShannonError::Io(IoError::Open { .. })));
}

#[test]
fn test_size_limit_applies() {
    let file = create_temp_file(&[b'x'; 64]);
    let cfg = AnalysisConfig {
        io: IOLimits {
            max_file_size: 63,
            ..IOLimits::default()
        },
        ..AnalysisConfig::default()
    };
    let err = analyze_path(file.path(), InputMode::Text, &cfg).unwrap_err();
    assert!(matches!(
        err,
        ShannonError::Io(IoError::FileTooLarge { limit: 63, found: 64 })
    ));
}

#[test]
fn test_loaded_file_detection() {
    let file = create_temp_file(&utf16be_with_bom("entropy"));
    let loaded = LoadedFile::open(file.path(), &IOLimits::default()).unwrap();
    let content = loaded.decode(&TextDetector::default());
    assert_eq!(content.encoding(), Some(TextEncoding::Utf16Be));
    assert_eq!(content.text(), Some("entropy"));
    assert_eq!(content.byte_count(), loaded.byte_count());
}

#[cfg(target_os = "linux")]
#[test]
fn test_procfs_file_is_read_to_end() {
    let path = std::path::Path::new("/proc/self/status");
    let analysis = analyze_path(path, InputMode::Text, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.content, ContentKind::Text);
    assert_eq!(analysis.encoding, Some(TextEncoding::Utf8));
    assert!(analysis.byte_count > 0);
    assert!(analysis.report.result > 0.0);
}

#[cfg(unix)]
#[test]
fn test_fifo_is_read_to_end() {
    use std::io::Write;
    use std::process::Command;

    let dir = tempfile::tempdir().unwrap();
    let fifo = dir.path().join("message.fifo");
    let created = Command::new("mkfifo")
        .arg(&fifo)
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    if !created {
        eprintln!("mkfifo unavailable, skipping");
        return;
    }

    let writer_path = fifo.clone();
    let writer = std::thread::spawn(move || {
        let mut pipe = std::fs::OpenOptions::new()
            .write(true)
            .open(writer_path)
            .unwrap();
        pipe.write_all(b"AAAABBBCCD").unwrap();
    });

    let analysis = analyze_path(&fifo, InputMode::Text, &AnalysisConfig::default()).unwrap();
    writer.join().unwrap();

    assert_eq!(analysis.byte_count, 10);
    assert_eq!(analysis.content, ContentKind::Text);
    assert_eq!(analysis.report.length, 10);
    assert!((analysis.report.result - 1.846_439_344_671_015_4).abs() < 1e-12);
}
