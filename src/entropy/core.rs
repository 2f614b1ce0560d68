//! Core entropy calculation primitives.
//!
//! [`ShannonCalculator`] accumulates letter frequencies incrementally and
//! computes the Shannon self-information of the message on demand. The
//! numeric result and the formatted report are cached until the next
//! mutating call.

use std::collections::HashMap;
use std::fmt;

use once_cell::unsync::OnceCell;
use tracing::trace;

use crate::config::EntropyConfig;
use crate::entropy::report::{EntropyReport, LogBase};

/// Default logarithm base (bits).
pub const DEFAULT_LOG_BASE: i32 = 2;

/// Largest accepted logarithm base. Larger values are clamped.
pub const MAX_LOG_BASE: i32 = 255;

/// A symbol the calculator can count.
///
/// Bytes are widened to the code point of the same value; no multi-byte
/// decoding takes place.
pub trait Letter: Copy {
    fn to_letter(self) -> char;
}

impl Letter for char {
    #[inline]
    fn to_letter(self) -> char {
        self
    }
}

impl Letter for u8 {
    #[inline]
    fn to_letter(self) -> char {
        char::from(self)
    }
}

/// Calculates Shannon self-information in a message.
///
/// A message is a sequence of letters added with one of the `add` methods.
/// [`result`](Self::result) then gives the measure of information in the
/// message under the configured logarithm base.
///
/// The calculator is not `Sync`: one instance serves one computation.
#[derive(Debug, Clone)]
pub struct ShannonCalculator {
    alphabet: HashMap<char, f64>,
    length: u64,
    log_base: i32,
    metric_entropy: bool,
    result_cache: OnceCell<f64>,
    report_cache: OnceCell<String>,
}

impl ShannonCalculator {
    /// Creates an empty calculator using base 2.
    pub fn new() -> Self {
        Self {
            alphabet: HashMap::new(),
            length: 0,
            log_base: DEFAULT_LOG_BASE,
            metric_entropy: false,
            result_cache: OnceCell::new(),
            report_cache: OnceCell::new(),
        }
    }

    /// Creates an empty calculator with the given configuration applied.
    pub fn with_config(cfg: &EntropyConfig) -> Self {
        let mut calc = Self::new();
        calc.set_log_base(cfg.log_base);
        calc.set_metric_entropy(cfg.metric_entropy);
        calc
    }

    /// Returns the configured logarithm base. Values of 1 or less mean nats.
    pub fn log_base(&self) -> i32 {
        self.log_base
    }

    /// Sets the logarithm base.
    ///
    /// Values above [`MAX_LOG_BASE`] are clamped silently. There is no lower
    /// clamp: any value of 1 or less selects the natural logarithm.
    pub fn set_log_base(&mut self, base: i32) {
        let base = base.min(MAX_LOG_BASE);
        if self.log_base != base {
            self.log_base = base;
            self.invalidate();
        }
    }

    /// Returns whether the result is divided by the message length.
    pub fn is_metric_entropy(&self) -> bool {
        self.metric_entropy
    }

    /// Sets whether the result is calculated as metric entropy, i.e. the
    /// Shannon measure divided by the message length.
    pub fn set_metric_entropy(&mut self, enabled: bool) {
        if self.metric_entropy != enabled {
            self.metric_entropy = enabled;
            self.invalidate();
        }
    }

    /// Returns the total message length.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Returns the number of distinct letters seen.
    pub fn letter_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the alphabet: each letter with its count in the message.
    ///
    /// Counts divided by [`length`](Self::length) give probabilities.
    pub fn alphabet(&self) -> &HashMap<char, f64> {
        &self.alphabet
    }

    /// Returns the probability of `letter`, or `None` if it never occurred.
    pub fn probability<L: Letter>(&self, letter: L) -> Option<f64> {
        self.alphabet
            .get(&letter.to_letter())
            .map(|&count| count / self.length as f64)
    }

    /// Adds a single letter.
    #[inline]
    pub fn add<L: Letter>(&mut self, letter: L) {
        *self.alphabet.entry(letter.to_letter()).or_insert(0.0) += 1.0;
        self.length += 1;
        self.invalidate();
    }

    /// Adds a single char letter.
    pub fn add_char(&mut self, c: char) {
        self.add(c);
    }

    /// Adds a single byte letter.
    pub fn add_byte(&mut self, b: u8) {
        self.add(b);
    }

    /// Adds every char of `text` in order.
    pub fn add_str(&mut self, text: &str) {
        self.add_chars(text.chars());
    }

    /// Adds a sequence of chars.
    pub fn add_chars<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        for c in chars {
            self.add(c);
        }
    }

    /// Adds a sequence of bytes.
    pub fn add_bytes<I: IntoIterator<Item = u8>>(&mut self, bytes: I) {
        for b in bytes {
            self.add(b);
        }
    }

    /// Clears the message and sets the length to 0. Configuration is kept.
    pub fn clear(&mut self) {
        self.length = 0;
        self.alphabet.clear();
        self.invalidate();
    }

    /// Returns the Shannon measure under the configured base.
    ///
    /// Always `NaN` when the message is empty. Otherwise the value is
    /// computed once and served from the cache until the next mutation.
    pub fn result(&self) -> f64 {
        if self.length == 0 {
            return f64::NAN;
        }
        *self.result_cache.get_or_init(|| self.compute())
    }

    /// Returns the human-readable summary of the message and its result.
    pub fn report(&self) -> &str {
        self.report_cache
            .get_or_init(|| self.summary().to_string())
            .as_str()
    }

    /// Returns a structured snapshot of the current state and result.
    pub fn summary(&self) -> EntropyReport {
        EntropyReport {
            length: self.length,
            letter_count: self.alphabet.len(),
            log_base: LogBase::from_raw(self.log_base),
            metric_entropy: self.metric_entropy,
            result: self.result(),
        }
    }

    fn compute(&self) -> f64 {
        // Direct log2/log10 avoid the rounding of a change of base.
        let sum = match LogBase::from_raw(self.log_base) {
            LogBase::Natural => self.sum_with(f64::ln),
            LogBase::Bits => self.sum_with(f64::log2),
            LogBase::Decimal => self.sum_with(f64::log10),
            LogBase::Other(base) => {
                let ln_base = f64::from(base).ln();
                self.sum_with(|p| p.ln() / ln_base)
            }
        };

        let result = if self.metric_entropy {
            sum / self.length as f64
        } else {
            sum
        };

        trace!(
            length = self.length,
            letters = self.alphabet.len(),
            log_base = self.log_base,
            metric = self.metric_entropy,
            result,
            "Computed entropy"
        );
        result
    }

    // Only stored letters are visited, so p is never zero.
    fn sum_with(&self, log: impl Fn(f64) -> f64) -> f64 {
        let total = self.length as f64;
        self.alphabet.values().fold(0.0, |sum, &count| {
            let p = count / total;
            sum - p * log(p)
        })
    }

    fn invalidate(&mut self) {
        self.result_cache.take();
        self.report_cache.take();
    }
}

impl Default for ShannonCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShannonCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report())
    }
}

impl Extend<char> for ShannonCalculator {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.add_chars(iter);
    }
}

impl Extend<u8> for ShannonCalculator {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.add_bytes(iter);
    }
}

impl FromIterator<char> for ShannonCalculator {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut calc = Self::new();
        calc.add_chars(iter);
        calc
    }
}

impl FromIterator<u8> for ShannonCalculator {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut calc = Self::new();
        calc.add_bytes(iter);
        calc
    }
}
