//! End-to-end analysis: load, classify, preprocess, count, report.
//!
//! This is the headless replacement for the interactive front end. Loading
//! happens completely before any engine is created, so an I/O failure can
//! never leave a calculator holding partial data.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::config::AnalysisConfig;
use crate::encoding::{ContentKind, DecodedContent, TextDetector, TextEncoding};
use crate::entropy::{EntropyReport, ShannonCalculator};
use crate::error::Result;
use crate::io::{self, LoadedFile};

/// How loaded content is turned into letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Count decoded chars after preprocessing. Content that is not text
    /// falls back to raw bytes.
    #[default]
    Text,
    /// Count raw bytes without preprocessing. Detection still runs so the
    /// analysis describes the input.
    Binary,
}

/// Outcome of analysing one input.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Where the input came from (path, `<stdin>`, `<text>`, ...).
    pub source: String,
    pub content: ContentKind,
    /// Detected encoding for text content.
    pub encoding: Option<TextEncoding>,
    /// Size of the input in bytes.
    pub byte_count: usize,
    /// Whether chars (`text`) or bytes (`binary`) were counted.
    pub counted: InputMode,
    pub report: EntropyReport,
}

impl Analysis {
    /// Pretty-printed JSON; a `NaN` result is written as `null`.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {}", self.source)?;
        match self.encoding {
            Some(encoding) if self.content == ContentKind::Text => {
                writeln!(f, "Content: {} ({})", self.content, encoding)?
            }
            _ => writeln!(f, "Content: {}", self.content)?,
        }
        writeln!(f, "Bytes: {}", self.byte_count)?;
        writeln!(f)?;
        write!(f, "{}", self.report)
    }
}

/// Counts the chars of `text` after applying the configured filter.
pub fn analyze_text(text: &str, cfg: &AnalysisConfig) -> ShannonCalculator {
    let mut calc = ShannonCalculator::with_config(&cfg.entropy);
    if cfg.filter.is_identity() {
        calc.add_str(text);
    } else {
        calc.add_str(&cfg.filter.apply(text));
    }
    calc
}

/// Counts raw bytes, each widened to a char.
pub fn analyze_bytes(data: &[u8], cfg: &AnalysisConfig) -> ShannonCalculator {
    let mut calc = ShannonCalculator::with_config(&cfg.entropy);
    calc.add_bytes(data.iter().copied());
    calc
}

/// Counts `content` according to `mode`, returning the calculator and what
/// was actually counted.
pub fn analyze_content(
    content: &DecodedContent,
    mode: InputMode,
    cfg: &AnalysisConfig,
) -> (ShannonCalculator, InputMode) {
    match (mode, content.text()) {
        (InputMode::Text, Some(text)) => (analyze_text(text, cfg), InputMode::Text),
        _ => (analyze_bytes(content.raw(), cfg), InputMode::Binary),
    }
}

fn classify(raw: bytes::Bytes, cfg: &AnalysisConfig) -> DecodedContent {
    TextDetector::new(cfg.detector.clone()).load(raw)
}

fn finish(
    source: String,
    content: &DecodedContent,
    mode: InputMode,
    cfg: &AnalysisConfig,
) -> Analysis {
    let (calc, counted) = analyze_content(content, mode, cfg);
    let analysis = Analysis {
        source,
        content: content.kind(),
        encoding: content.encoding(),
        byte_count: content.byte_count(),
        counted,
        report: calc.summary(),
    };
    debug!(
        source = %analysis.source,
        content = %analysis.content,
        result = analysis.report.result,
        "Analysis complete"
    );
    analysis
}

/// Loads the file at `path` and analyses it.
pub fn analyze_path<P: AsRef<Path>>(
    path: P,
    mode: InputMode,
    cfg: &AnalysisConfig,
) -> Result<Analysis> {
    let path = path.as_ref();
    let span = info_span!("analyze_path", path = %path.display());
    let _guard = span.enter();

    let loaded = LoadedFile::open(path, &cfg.io)?;
    let content = classify(loaded.bytes().clone(), cfg);
    Ok(finish(path.display().to_string(), &content, mode, cfg))
}

/// Reads `reader` to completion and analyses it under the label `source`.
pub fn analyze_reader<R: Read>(
    reader: R,
    source: &str,
    mode: InputMode,
    cfg: &AnalysisConfig,
) -> Result<Analysis> {
    let raw = io::read_to_end(reader, &cfg.io)?;
    let content = classify(raw, cfg);
    Ok(finish(source.to_string(), &content, mode, cfg))
}

/// Analyses an in-memory message typed or generated by the caller.
pub fn analyze_message(text: &str, source: &str, cfg: &AnalysisConfig) -> Analysis {
    let calc = analyze_text(text, cfg);
    Analysis {
        source: source.to_string(),
        content: if text.is_empty() {
            ContentKind::Empty
        } else {
            ContentKind::Text
        },
        encoding: None,
        byte_count: text.len(),
        counted: InputMode::Text,
        report: calc.summary(),
    }
}
