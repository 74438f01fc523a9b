//! Length section - additive length scoring.

/// Minimum acceptable password length.
pub const MIN_LENGTH: usize = 8;

/// Length at which the "consider more characters" feedback stops.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Cumulative length bonuses: +10 at 8, +10 at 12, +5 at 16, +5 at 20.
///
/// A 20-character password collects all four bonuses for the full 30
/// points. Length is counted in Unicode scalar values.
pub fn length_score(length: usize) -> i32 {
    let mut score = 0;
    if length >= 8 {
        score += 10;
    }
    if length >= 12 {
        score += 10;
    }
    if length >= 16 {
        score += 5;
    }
    if length >= 20 {
        score += 5;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_score_below_minimum() {
        assert_eq!(length_score(0), 0);
        assert_eq!(length_score(7), 0);
    }

    #[test]
    fn test_length_score_thresholds() {
        assert_eq!(length_score(8), 10);
        assert_eq!(length_score(11), 10);
        assert_eq!(length_score(12), 20);
        assert_eq!(length_score(16), 25);
        assert_eq!(length_score(19), 25);
        assert_eq!(length_score(20), 30);
    }

    #[test]
    fn test_length_score_ceiling() {
        assert_eq!(length_score(64), 30);
        assert_eq!(length_score(128), 30);
    }
}
