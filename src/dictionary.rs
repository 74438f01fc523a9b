//! Common-password dictionary lookup.
//!
//! The evaluator does not own the dictionary: it receives a read-only
//! [`WeakPasswordLookup`] capability. The bundled [`CommonPasswordSet`]
//! implementation loads a newline-delimited list from disk; callers backed
//! by a database table implement the trait over their own store.

use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Trailing symbols stripped when deriving dictionary variants.
const TRAILING_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Minimum length for a normalized variant to be worth checking.
const MIN_VARIANT_LENGTH: usize = 4;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// The dictionary collaborator could not answer a lookup.
///
/// The evaluator treats this as "not common" (fail-open) and flags the
/// degradation on the returned evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Dictionary lookup unavailable: {0}")]
pub struct LookupError(pub String);

/// Read-only capability over a known-weak-password store.
pub trait WeakPasswordLookup {
    /// Returns whether `candidate` appears in the store, case-insensitively.
    fn is_known_weak(&self, candidate: &str) -> Result<bool, LookupError>;
}

/// Always-miss lookup for callers without a dictionary store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl WeakPasswordLookup for NoDictionary {
    fn is_known_weak(&self, _candidate: &str) -> Result<bool, LookupError> {
        Ok(false)
    }
}

/// In-memory dictionary backed by a `HashSet` of lowercased entries.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    passwords: HashSet<String>,
}

impl CommonPasswordSet {
    /// Returns the dictionary file path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_DICTIONARY_PATH`
    /// 2. Default path `./assets/common-passwords.txt`
    pub fn default_path() -> PathBuf {
        std::env::var("PWD_DICTIONARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
    }

    /// Loads the dictionary from [`Self::default_path`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load() -> Result<Self, DictionaryError> {
        Self::load_from_path(Self::default_path())
    }

    /// Loads the dictionary from a specific file path.
    ///
    /// Entries are trimmed, lowercased and deduplicated; blank lines are
    /// dropped.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: file not found {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        let passwords: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} passwords from {:?}", passwords.len(), path);

        Ok(CommonPasswordSet { passwords })
    }

    /// Builds a dictionary from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let passwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        CommonPasswordSet { passwords }
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

impl WeakPasswordLookup for CommonPasswordSet {
    fn is_known_weak(&self, candidate: &str) -> Result<bool, LookupError> {
        Ok(self.passwords.contains(&candidate.to_lowercase()))
    }
}

/// Checks whether a password matches the dictionary directly or through a
/// trivially derived variant.
///
/// The exact lowercased form is checked first. If that misses, the
/// normalized variants are tried: lowercase, uppercase, title-case, trailing
/// digits stripped, trailing symbols stripped. Variants shorter than 4
/// characters are skipped.
///
/// Lookup errors propagate; the evaluator decides the fail-open policy.
pub fn is_common_password(
    password: &str,
    lookup: &impl WeakPasswordLookup,
) -> Result<bool, LookupError> {
    let lowered = password.to_lowercase();

    if lookup.is_known_weak(&lowered)? {
        return Ok(true);
    }

    let variants = [
        lowered.clone(),
        password.to_uppercase(),
        title_case(&lowered),
        lowered.trim_end_matches(|c: char| c.is_ascii_digit()).to_string(),
        lowered.trim_end_matches(TRAILING_SYMBOLS).to_string(),
    ];

    for variant in &variants {
        if variant.chars().count() >= MIN_VARIANT_LENGTH && lookup.is_known_weak(variant)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
