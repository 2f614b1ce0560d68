//! Configuration for the analysis pipeline.
//!
//! Provides centralized configuration for the entropy engine, the text
//! detector, caller-side preprocessing and file loading, with sensible
//! defaults.

use serde::{Deserialize, Serialize};

use crate::entropy::DEFAULT_LOG_BASE;
use crate::io::IOLimits;
use crate::preprocess::TextFilter;

/// Number of leading bytes scanned for a zero byte before a buffer that is
/// not valid UTF-8 is declared binary.
pub const DEFAULT_NULL_SCAN_LIMIT: usize = 32 * 1024;

/// Master configuration for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entropy engine configuration.
    pub entropy: EntropyConfig,
    /// Preprocessing applied to text before it reaches the engine.
    pub filter: TextFilter,
    /// Text encoding detection configuration.
    pub detector: DetectorConfig,
    /// Limits for loading files and streams.
    pub io: IOLimits,
}

/// Entropy engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyConfig {
    /// Logarithm base. 1 or less selects nats; clamped to at most 255.
    pub log_base: i32,
    /// Divide the result by the message length.
    pub metric_entropy: bool,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            log_base: DEFAULT_LOG_BASE,
            metric_entropy: false,
        }
    }
}

/// Text encoding detection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Leading bytes scanned for a zero byte (binary signal).
    pub null_scan_limit: usize,
    /// Try the single-byte Latin-1 table after UTF-8 fails.
    pub try_latin1: bool,
    /// Try UTF-16LE without a byte order mark as the last candidate.
    pub try_utf16le: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            null_scan_limit: DEFAULT_NULL_SCAN_LIMIT,
            try_latin1: true,
            try_utf16le: true,
        }
    }
}
