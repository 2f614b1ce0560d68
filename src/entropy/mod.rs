//! Shannon entropy over sequences of letters.
//!
//! This module provides the incremental frequency accounting used throughout
//! the crate. It includes:
//!
//! - [`ShannonCalculator`], which counts letters (chars, or bytes widened to
//!   chars) and computes the entropy under a configurable logarithm base
//! - [`EntropyReport`], a structured snapshot that renders the textual report
//!
//! # Example
//!
//! ```
//! use shannon::entropy::ShannonCalculator;
//!
//! let mut calc = ShannonCalculator::new();
//! calc.add_str("ABCD");
//! assert_eq!(calc.result(), 2.0);
//!
//! calc.set_metric_entropy(true);
//! assert_eq!(calc.result(), 0.5);
//! ```

pub mod core;
pub mod report;

// Re-export main functionality
pub use self::core::{Letter, ShannonCalculator, DEFAULT_LOG_BASE, MAX_LOG_BASE};
pub use self::report::{EntropyReport, LogBase};
