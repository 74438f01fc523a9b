//! Character variety section - scores uppercase, lowercase, digits, symbols.

use crate::types::CharacterClasses;

/// Additive variety bonuses, independent of length: +5 lowercase,
/// +5 uppercase, +10 digits, +20 symbols. Symbols weigh most because they
/// are the rarest class in leaked corpora.
pub fn variety_score(classes: &CharacterClasses) -> i32 {
    let mut score = 0;
    if classes.lowercase {
        score += 5;
    }
    if classes.uppercase {
        score += 5;
    }
    if classes.digits {
        score += 10;
    }
    if classes.symbols {
        score += 20;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_score_all_classes() {
        let classes = CharacterClasses::scan("aB1!");
        assert_eq!(variety_score(&classes), 40);
    }

    #[test]
    fn test_variety_score_letters_only() {
        let classes = CharacterClasses::scan("aBcD");
        assert_eq!(variety_score(&classes), 10);
    }

    #[test]
    fn test_variety_score_symbols_weigh_most() {
        let symbols_only = CharacterClasses::scan("!!!!");
        let digits_only = CharacterClasses::scan("1234");
        assert!(variety_score(&symbols_only) > variety_score(&digits_only));
    }

    #[test]
    fn test_variety_score_empty() {
        assert_eq!(variety_score(&CharacterClasses::none()), 0);
    }
}
