//! Password scoring sections
//!
//! Each section analyzes one aspect of password strength and contributes
//! a score delta or a pattern report; the evaluator composes them in a
//! fixed order.

mod entropy;
mod length;
mod pattern;
mod variety;

pub use entropy::{entropy_bits, estimate_crack_time};
pub use length::{length_score, MIN_LENGTH, RECOMMENDED_LENGTH};
pub use pattern::PatternReport;
pub use variety::variety_score;
