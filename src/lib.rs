//! Password strength evaluation and suggestion library
//!
//! This library provides password strength evaluation (heuristic score,
//! entropy estimate, pattern penalties, common-password dictionary check,
//! crack-time estimate) and generation of suggested passwords and
//! passphrases.
//!
//! # Features
//!
//! - `async` (default): Enables a channel-based async evaluation variant
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the common-password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_advisor::{evaluate_password_strength, generate_suggestions, CommonPasswordSet};
//! use secrecy::SecretString;
//!
//! // Load the dictionary once at startup
//! let dictionary = CommonPasswordSet::load().expect("Failed to load dictionary");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, &dictionary)
//!     .expect("password within length limits");
//!
//! println!("Score: {}", evaluation.score);
//! println!("Strength: {:?}", evaluation.strength_level);
//! println!("Crack time: {}", evaluation.estimated_crack_time);
//!
//! for candidate in generate_suggestions(&password) {
//!     println!("{:?}: {}", candidate.kind, candidate.password);
//! }
//! ```

// Internal modules
mod dictionary;
mod evaluator;
mod sections;
mod suggest;
mod types;

// Public API
pub use dictionary::{
    is_common_password, CommonPasswordSet, DictionaryError, LookupError, NoDictionary,
    WeakPasswordLookup,
};
pub use evaluator::{evaluate_password_strength, EvaluateError, MAX_PASSWORD_LENGTH};
pub use suggest::{generate_suggestions, generate_suggestions_with_rng, MAX_SUGGESTIONS};
pub use types::{
    CharacterClasses, PasswordEvaluation, QualitativeStrength, StrengthLevel, SuggestionCandidate,
    SuggestionKind,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
