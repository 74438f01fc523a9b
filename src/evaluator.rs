//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::dictionary::{is_common_password, WeakPasswordLookup};
use crate::sections::{
    entropy_bits, estimate_crack_time, length_score, variety_score, PatternReport, MIN_LENGTH,
    RECOMMENDED_LENGTH,
};
use crate::types::{CharacterClasses, PasswordEvaluation, StrengthLevel};

/// Maximum password length accepted by the evaluator, in Unicode scalar
/// values. Longer input is rejected before any scoring runs.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Flat penalty for a dictionary hit.
const COMMON_PASSWORD_PENALTY: i32 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("Password exceeds maximum length of {max} characters (got {length})")]
    InputTooLong { length: usize, max: usize },
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// The fixed pipeline: character-class detection, charset/entropy, length
/// score, variety score, pattern penalties, dictionary penalty, clamp to
/// `[0, 100]`, strength level, feedback, crack-time estimate.
///
/// Length is counted in Unicode scalar values (`chars().count()`), the same
/// unit used for entropy and the max-length check.
///
/// An empty password short-circuits to a zero-score evaluation with the
/// single feedback entry `"Password is required"`. A failing dictionary
/// lookup does not abort the evaluation: the password is treated as not
/// common and `lookup_failed` is set on the result.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `dictionary` - Read-only known-weak-password lookup capability
///
/// # Errors
/// [`EvaluateError::InputTooLong`] when the password exceeds
/// [`MAX_PASSWORD_LENGTH`].
pub fn evaluate_password_strength(
    password: &SecretString,
    dictionary: &impl WeakPasswordLookup,
) -> Result<PasswordEvaluation, EvaluateError> {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    if length == 0 {
        return Ok(empty_password_evaluation());
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(EvaluateError::InputTooLong {
            length,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    let classes = CharacterClasses::scan(pwd);
    let entropy = entropy_bits(length, classes.charset_size());

    let mut raw_score: i32 = 0;
    raw_score += length_score(length);
    raw_score += variety_score(&classes);

    let patterns = PatternReport::scan(pwd);
    raw_score -= patterns.penalty();

    let (is_common, lookup_failed) = match is_common_password(pwd, dictionary) {
        Ok(found) => (found, false),
        Err(_error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Dictionary lookup failed, treating password as not common: {}", _error);
            (false, true)
        }
    };
    if is_common {
        raw_score -= COMMON_PASSWORD_PENALTY;
    }

    let score = raw_score.clamp(0, 100) as u8;

    Ok(PasswordEvaluation {
        score,
        normalized_score: f64::from(score) / 100.0,
        strength_level: StrengthLevel::from_score(score),
        entropy,
        length,
        character_types: classes,
        is_common,
        feedback: build_feedback(length, &classes, &patterns, is_common),
        suggestions: build_hints(length, &classes, is_common),
        estimated_crack_time: estimate_crack_time(entropy),
        lookup_failed,
    })
}

/// Async variant that sends the evaluation result via channel.
///
/// Intended for async callers (e.g. a live-check endpoint) that consume
/// results from a worker task.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx<L: WeakPasswordLookup>(
    password: &SecretString,
    dictionary: &L,
    tx: mpsc::Sender<Result<PasswordEvaluation, EvaluateError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let evaluation = evaluate_password_strength(password, dictionary);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

fn empty_password_evaluation() -> PasswordEvaluation {
    PasswordEvaluation {
        score: 0,
        normalized_score: 0.0,
        strength_level: StrengthLevel::VeryWeak,
        entropy: 0.0,
        length: 0,
        character_types: CharacterClasses::none(),
        is_common: false,
        feedback: vec!["Password is required".to_string()],
        suggestions: Vec::new(),
        estimated_crack_time: "Instantly".to_string(),
        lookup_failed: false,
    }
}

/// Builds feedback in detection order: dictionary, length, missing classes,
/// repeated pattern, sequential/keyboard pattern.
fn build_feedback(
    length: usize,
    classes: &CharacterClasses,
    patterns: &PatternReport,
    is_common: bool,
) -> Vec<String> {
    let mut feedback = Vec::new();

    if is_common {
        feedback.push("WARNING: This password is commonly used and easily guessable".to_string());
    }

    if length < MIN_LENGTH {
        feedback.push(format!(
            "LENGTH: Password is too short (minimum {} characters)",
            MIN_LENGTH
        ));
    } else if length < RECOMMENDED_LENGTH {
        feedback.push(format!(
            "LENGTH: Consider using at least {} characters for better security",
            RECOMMENDED_LENGTH
        ));
    }

    if !classes.lowercase {
        feedback.push("CHARACTERS: Add lowercase letters (a-z)".to_string());
    }
    if !classes.uppercase {
        feedback.push("CHARACTERS: Add uppercase letters (A-Z)".to_string());
    }
    if !classes.digits {
        feedback.push("NUMBERS: Add numbers (0-9)".to_string());
    }
    if !classes.symbols {
        feedback.push("SYMBOLS: Add special characters (!@#$%^&*)".to_string());
    }

    if patterns.repeated {
        feedback.push("PATTERN: Avoid repeating the same character multiple times".to_string());
    }
    if patterns.sequential || patterns.keyboard {
        feedback.push("PATTERN: Avoid common sequences and keyboard patterns".to_string());
    }

    feedback
}

/// Improvement hints for the `suggestions` field.
///
/// Deterministic on purpose: the evaluation must stay referentially
/// transparent, so the randomized example lives in the suggestion
/// generator instead.
fn build_hints(length: usize, classes: &CharacterClasses, is_common: bool) -> Vec<String> {
    let mut hints = Vec::new();

    if is_common || length < RECOMMENDED_LENGTH || !classes.symbols {
        hints.push("Try a generated password or passphrase from the suggestion tool".to_string());
    }

    hints.push("Use a passphrase: combine 4-6 random words with numbers and symbols".to_string());
    hints.push(
        "Consider using a password manager to generate and store unique passwords".to_string(),
    );

    if length >= MIN_LENGTH && !is_common {
        hints.push(
            "Your password has good basic security. Consider adding more characters for extra protection"
                .to_string(),
        );
    }

    hints
}
