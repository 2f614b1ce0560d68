//! Shannon self-information of symbol sequences, and strict text encoding
//! detection for the raw content those sequences come from.
//!
//! The two halves are independent:
//!
//! - [`entropy::ShannonCalculator`] counts letters and computes the entropy
//!   under a configurable logarithm base, optionally as metric entropy.
//! - [`encoding::TextDetector`] decides whether a byte buffer is text and,
//!   if so, in which encoding, returning the decoded string.
//!
//! [`analysis`] ties them together for files, streams and typed messages.

pub mod analysis;
pub mod config;
pub mod encoding;
pub mod entropy;
pub mod error;
pub mod generate;
pub mod io;
pub mod logging;
pub mod preprocess;

pub use analysis::{Analysis, InputMode};
pub use config::AnalysisConfig;
pub use encoding::{DecodedContent, TextDetector, TextEncoding};
pub use entropy::{EntropyReport, LogBase, ShannonCalculator};
pub use error::{Result, ShannonError};
