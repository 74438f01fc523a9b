//! Pattern analysis section - detects low-entropy structural patterns.

/// Ascending digit run, with the 8-9-0 wraparound included.
const DIGIT_SEQUENCE: &str = "01234567890";

const LETTER_SEQUENCE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Keyboard-adjacency substrings, checked in order; only the first match
/// counts.
const KEYBOARD_PATTERNS: [&str; 6] = ["qwerty", "asdf", "zxcv", "1234", "qwertz", "azerty"];

/// Stems that make a whole password guessable when followed only by digits.
const COMMON_STEMS: [&str; 6] = ["password", "admin", "user", "test", "guest", "login"];

const SEQUENTIAL_PENALTY: i32 = 10;
const REPEATED_PENALTY: i32 = 15;
const KEYBOARD_PENALTY: i32 = 20;
const COMMON_STEM_PENALTY: i32 = 25;

/// Which structural patterns were found in a password.
///
/// Each pattern is detected independently against the full password;
/// penalties are cumulative except the keyboard check, which applies once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternReport {
    /// Ascending run of 3+ characters from the digit or letter sequence.
    pub sequential: bool,
    /// Same character repeated 3+ times consecutively.
    pub repeated: bool,
    /// Contains a keyboard-adjacency substring.
    pub keyboard: bool,
    /// Whole password is a common stem plus optional trailing digits.
    pub common_stem: bool,
}

impl PatternReport {
    pub fn scan(password: &str) -> Self {
        let lowered = password.to_lowercase();
        PatternReport {
            sequential: has_sequential_run(&lowered),
            repeated: has_repeated_run(password),
            keyboard: KEYBOARD_PATTERNS.iter().any(|p| lowered.contains(p)),
            common_stem: matches_common_stem(&lowered),
        }
    }

    /// Total penalty to subtract from the raw score.
    pub fn penalty(&self) -> i32 {
        let mut penalty = 0;
        if self.sequential {
            penalty += SEQUENTIAL_PENALTY;
        }
        if self.repeated {
            penalty += REPEATED_PENALTY;
        }
        if self.keyboard {
            penalty += KEYBOARD_PENALTY;
        }
        if self.common_stem {
            penalty += COMMON_STEM_PENALTY;
        }
        penalty
    }

    pub fn any(&self) -> bool {
        self.sequential || self.repeated || self.keyboard || self.common_stem
    }
}

/// Looks for any 3-character window that is a substring of the fixed
/// ascending sequences. Expects lowercased input.
fn has_sequential_run(lowered: &str) -> bool {
    let chars: Vec<char> = lowered.chars().collect();
    chars.windows(3).any(|window| {
        let run: String = window.iter().collect();
        DIGIT_SEQUENCE.contains(&run) || LETTER_SEQUENCE.contains(&run)
    })
}

/// Case-sensitive: "aAa" is not a repeated run, "aaa" is.
fn has_repeated_run(password: &str) -> bool {
    let mut run_length = 1;
    let mut previous: Option<char> = None;
    for c in password.chars() {
        if previous == Some(c) {
            run_length += 1;
            if run_length >= 3 {
                return true;
            }
        } else {
            run_length = 1;
        }
        previous = Some(c);
    }
    false
}

fn matches_common_stem(lowered: &str) -> bool {
    COMMON_STEMS.iter().any(|stem| {
        lowered
            .strip_prefix(stem)
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_digits() {
        let report = PatternReport::scan("xy123z");
        assert!(report.sequential);
        assert_eq!(report.penalty(), SEQUENTIAL_PENALTY);
    }

    #[test]
    fn test_sequential_digit_wraparound() {
        assert!(PatternReport::scan("pass890").sequential);
    }

    #[test]
    fn test_sequential_letters_case_insensitive() {
        assert!(PatternReport::scan("myABCkey9!").sequential);
        assert!(PatternReport::scan("wxy.").sequential);
    }

    #[test]
    fn test_sequential_requires_three_in_a_row() {
        let report = PatternReport::scan("a1c3e5g7");
        assert!(!report.sequential);
    }

    #[test]
    fn test_descending_is_not_sequential() {
        assert!(!PatternReport::scan("zyx321x").sequential);
    }

    #[test]
    fn test_repeated_characters() {
        assert!(PatternReport::scan("aaa").repeated);
        assert!(PatternReport::scan("pass111word").repeated);
        assert!(!PatternReport::scan("aabbaabb").repeated);
    }

    #[test]
    fn test_repeated_is_case_sensitive() {
        assert!(!PatternReport::scan("aAaAaA").repeated);
    }

    #[test]
    fn test_keyboard_pattern() {
        let report = PatternReport::scan("myQWERTYpass!");
        assert!(report.keyboard);
        assert_eq!(report.penalty(), KEYBOARD_PENALTY);
    }

    #[test]
    fn test_keyboard_penalty_applied_once() {
        // Two list entries present, still a single 20-point penalty.
        let single = PatternReport::scan("qwertyblkmwd");
        let double = PatternReport::scan("qwertyasdfwd");
        assert_eq!(single.penalty(), double.penalty());
    }

    #[test]
    fn test_common_stem_with_trailing_digits() {
        assert!(PatternReport::scan("admin123").common_stem);
        assert!(PatternReport::scan("Password2024").common_stem);
        assert!(PatternReport::scan("guest").common_stem);
    }

    #[test]
    fn test_common_stem_requires_whole_match() {
        assert!(!PatternReport::scan("admin123x").common_stem);
        assert!(!PatternReport::scan("myadmin123").common_stem);
    }

    #[test]
    fn test_penalties_are_cumulative() {
        // Sequential "123", keyboard "1234", repeated "aaa", stem no.
        let report = PatternReport::scan("aaa1234");
        assert!(report.sequential);
        assert!(report.repeated);
        assert!(report.keyboard);
        assert!(!report.common_stem);
        assert_eq!(
            report.penalty(),
            SEQUENTIAL_PENALTY + REPEATED_PENALTY + KEYBOARD_PENALTY
        );
    }

    #[test]
    fn test_clean_password_has_no_penalty() {
        let report = PatternReport::scan("Tru3ly$Rand0m&Ph");
        assert!(!report.any());
        assert_eq!(report.penalty(), 0);
    }
}
