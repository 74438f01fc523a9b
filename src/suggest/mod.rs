//! Password suggestion generator.
//!
//! Builds up to [`MAX_SUGGESTIONS`] candidates in a fixed order: an
//! improved variant of the caller's password first, then freshly generated
//! word-combination passwords, passphrases, and pattern-based passwords.
//!
//! Randomness is injected: callers pass any [`rand::Rng`], so tests use a
//! seeded generator and assert structural properties instead of exact
//! strings. Generation never fails; an empty or too-short input just skips
//! the improved variant.

mod wordlists;

use rand::seq::index::sample;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::types::{CharacterClasses, QualitativeStrength, SuggestionCandidate, SuggestionKind};
use wordlists::{
    ACRONYM_PHRASES, ACRONYM_SYMBOLS, ADJECTIVES, IMPROVE_SYMBOLS, MONTHS, NOUNS,
    PASSPHRASE_WORDS, SEPARATORS, SYMBOLS,
};

/// Maximum number of candidates returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Minimum input length for the improved-variant step.
const MIN_IMPROVABLE_LENGTH: usize = 6;

/// Target length an improved password is padded to.
const IMPROVED_TARGET_LENGTH: usize = 12;

/// Generates suggestion candidates using the thread-local RNG.
pub fn generate_suggestions(current_password: &SecretString) -> Vec<SuggestionCandidate> {
    generate_suggestions_with_rng(current_password, &mut rand::thread_rng())
}

/// Generates suggestion candidates from a caller-supplied random source.
///
/// Order: improved variant (when applicable), three generated passwords,
/// two passphrases, a date-pattern password, an acronym password. The list
/// is truncated to [`MAX_SUGGESTIONS`] preserving that order.
pub fn generate_suggestions_with_rng<R: Rng + ?Sized>(
    current_password: &SecretString,
    rng: &mut R,
) -> Vec<SuggestionCandidate> {
    let mut candidates = Vec::new();

    let pwd = current_password.expose_secret();
    if pwd.chars().count() >= MIN_IMPROVABLE_LENGTH {
        let improved = improve_password(pwd, rng);
        if improved != pwd {
            candidates.push(SuggestionCandidate {
                kind: SuggestionKind::Improved,
                password: improved,
                description: "Enhanced version of your current password".to_string(),
                strength: QualitativeStrength::Medium,
            });
        }
    }

    candidates.extend(generated_passwords(rng));
    candidates.extend(passphrases(rng));
    candidates.extend(pattern_passwords(rng));

    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

/// Patches the missing character classes into an existing password, then
/// pads it with random lowercase letters to the target length.
fn improve_password<R: Rng + ?Sized>(password: &str, rng: &mut R) -> String {
    let classes = CharacterClasses::scan(password);
    let mut chars: Vec<char> = password.chars().collect();

    if !classes.uppercase && classes.lowercase {
        // Uppercase a random lowercase position so the fix is guaranteed.
        let positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .collect();
        let pos = positions[rng.gen_range(0..positions.len())];
        chars[pos] = chars[pos].to_ascii_uppercase();
    }

    let mut improved: String = chars.into_iter().collect();

    if !classes.digits {
        improved.push_str(&rng.gen_range(10..=99).to_string());
    }
    if !classes.symbols {
        improved.push(IMPROVE_SYMBOLS[rng.gen_range(0..IMPROVE_SYMBOLS.len())]);
    }
    while improved.chars().count() < IMPROVED_TARGET_LENGTH {
        improved.push(rng.gen_range(b'a'..=b'z') as char);
    }

    improved
}

/// Three `Adjective + Noun + number + symbol` passwords.
fn generated_passwords<R: Rng + ?Sized>(rng: &mut R) -> Vec<SuggestionCandidate> {
    (0..3)
        .map(|_| {
            let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
            let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
            let number = rng.gen_range(100..=999);
            let symbol = SYMBOLS[rng.gen_range(0..SYMBOLS.len())];

            SuggestionCandidate {
                kind: SuggestionKind::Generated,
                password: format!("{}{}{}{}", adjective, noun, number, symbol),
                description: "Strong combination of words, numbers, and symbols".to_string(),
                strength: QualitativeStrength::Strong,
            }
        })
        .collect()
}

/// Two four-word passphrases with a random separator and trailing number.
fn passphrases<R: Rng + ?Sized>(rng: &mut R) -> Vec<SuggestionCandidate> {
    (0..2)
        .map(|_| {
            let separator = SEPARATORS[rng.gen_range(0..SEPARATORS.len())];
            let words: Vec<String> = sample(rng, PASSPHRASE_WORDS.len(), 4)
                .iter()
                .map(|i| {
                    let word = PASSPHRASE_WORDS[i];
                    if rng.gen_bool(0.5) {
                        capitalize(word)
                    } else {
                        word.to_string()
                    }
                })
                .collect();
            let number = rng.gen_range(10..=99);

            let separator = separator.to_string();
            let password = format!("{}{}{}", words.join(&separator), separator, number);

            SuggestionCandidate {
                kind: SuggestionKind::Passphrase,
                password,
                description: "Easy to remember passphrase with separators".to_string(),
                strength: QualitativeStrength::VeryStrong,
            }
        })
        .collect()
}

/// A date-based password and an acronym-based password.
fn pattern_passwords<R: Rng + ?Sized>(rng: &mut R) -> Vec<SuggestionCandidate> {
    let month = MONTHS[rng.gen_range(0..MONTHS.len())];
    let day = rng.gen_range(10..=28);
    let year = rng.gen_range(1980..=2010);
    let date_password = format!("{}{}{}@Home!", month, day, year);

    let (phrase, acronym) = ACRONYM_PHRASES[rng.gen_range(0..ACRONYM_PHRASES.len())];
    let number = rng.gen_range(100..=999);
    let symbol = ACRONYM_SYMBOLS[rng.gen_range(0..ACRONYM_SYMBOLS.len())];
    let acronym_password = format!("{}{}{}", acronym, number, symbol);

    vec![
        SuggestionCandidate {
            kind: SuggestionKind::Pattern,
            password: date_password,
            description: "Date-based pattern with location and symbols".to_string(),
            strength: QualitativeStrength::Medium,
        },
        SuggestionCandidate {
            kind: SuggestionKind::Acronym,
            password: acronym_password,
            description: format!("Based on: \"{}\"", phrase),
            strength: QualitativeStrength::Strong,
        },
    ]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
