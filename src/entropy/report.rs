//! Log base classification and the textual entropy report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a raw logarithm base is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "base", rename_all = "snake_case")]
pub enum LogBase {
    /// Natural logarithm (nats); any raw base of 1 or less.
    Natural,
    /// Base 2 (bits).
    Bits,
    /// Base 10.
    Decimal,
    /// Any other integer base, via change of base.
    Other(i32),
}

impl LogBase {
    /// Classifies a raw base as stored by the calculator.
    pub fn from_raw(base: i32) -> Self {
        match base {
            i32::MIN..=1 => LogBase::Natural,
            2 => LogBase::Bits,
            10 => LogBase::Decimal,
            other => LogBase::Other(other),
        }
    }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogBase::Natural => f.write_str("e (nats)"),
            LogBase::Bits => f.write_str("2 (bits)"),
            LogBase::Decimal => f.write_str("10"),
            LogBase::Other(base) => write!(f, "{}", base),
        }
    }
}

/// Snapshot of a calculator's state and result.
///
/// `Display` renders the multi-line report; `Serialize` backs JSON output,
/// where a `NaN` result becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyReport {
    /// Total number of letters in the message.
    pub length: u64,
    /// Number of distinct letters.
    pub letter_count: usize,
    pub log_base: LogBase,
    pub metric_entropy: bool,
    /// Entropy value; `NaN` for an empty message.
    pub result: f64,
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Message Length: {}", self.length)?;
        writeln!(f, "Letter Count: {}", self.letter_count)?;
        writeln!(f, "Log Base: {}", self.log_base)?;
        writeln!(f, "Metric Entropy: {}", self.metric_entropy)?;
        write!(f, "Result: {}", self.result)
    }
}
