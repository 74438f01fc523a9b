//! Value types produced by the evaluation and suggestion engines.
//!
//! Everything here is created fresh per call and never mutated afterwards.
//! The serde output matches what the HTTP layer returns to the browser.

use serde::{Serialize, Serializer};

/// Coarse five-bucket strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a clamped score to its strength bucket.
    ///
    /// Boundaries are inclusive-lower: 80+ very-strong, 60+ strong,
    /// 40+ medium, 20+ weak, below that very-weak.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthLevel::VeryStrong,
            60..=79 => StrengthLevel::Strong,
            40..=59 => StrengthLevel::Medium,
            20..=39 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }
}

/// Presence flags for the four character classes.
///
/// A character counts toward exactly one class: symbol is the complement
/// of the other three, so non-ASCII characters land in `symbols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn scan(password: &str) -> Self {
        CharacterClasses {
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digits: password.chars().any(|c| c.is_ascii_digit()),
            symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub const fn none() -> Self {
        CharacterClasses {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    /// Sum of the sizes of the classes present (26/26/10/32).
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += 26;
        }
        if self.uppercase {
            size += 26;
        }
        if self.digits {
            size += 10;
        }
        if self.symbols {
            size += 32;
        }
        size
    }

    /// Number of classes present.
    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Full evaluation result for a single password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordEvaluation {
    /// Heuristic score clamped to `[0, 100]`.
    pub score: u8,
    #[serde(serialize_with = "two_decimals")]
    pub normalized_score: f64,
    pub strength_level: StrengthLevel,
    /// Estimated entropy in bits: `length * log2(charset_size)`.
    #[serde(serialize_with = "two_decimals")]
    pub entropy: f64,
    /// Password length in Unicode scalar values.
    pub length: usize,
    pub character_types: CharacterClasses,
    pub is_common: bool,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub estimated_crack_time: String,
    /// Set when the dictionary lookup failed and the evaluation fell back
    /// to treating the password as not common. Not part of the wire format.
    #[serde(skip)]
    pub lookup_failed: bool,
}

/// Origin of a suggestion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improved,
    Generated,
    Passphrase,
    Pattern,
    Acronym,
}

/// Qualitative label attached to a candidate. Internal only: the wire
/// format exposes just `type`, `password` and `description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitativeStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// A single suggested password or passphrase.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionCandidate {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub password: String,
    pub description: String,
    #[serde(skip)]
    pub strength: QualitativeStrength,
}

fn two_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}
