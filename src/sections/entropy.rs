//! Entropy section - keyspace entropy and crack-time bucketing.

/// Assumed attacker throughput for the crack-time estimate.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM_CUTOFF: f64 = 31_536_000_000.0;

/// Keyspace entropy in bits: `length * log2(charset_size)`.
///
/// Zero when no character class was detected. This is a keyspace proxy,
/// not a measure of the actual chosen password's randomness.
pub fn entropy_bits(length: usize, charset_size: u32) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Maps entropy to a human-readable crack-time bucket.
///
/// Average case: half the keyspace at [`GUESSES_PER_SECOND`].
pub fn estimate_crack_time(entropy: f64) -> String {
    let combinations = 2f64.powf(entropy);
    let seconds = combinations / (2.0 * GUESSES_PER_SECOND);

    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < MINUTE {
        format!("{:.1} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.1} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.1} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.1} days", seconds / DAY)
    } else if seconds < MILLENNIUM_CUTOFF {
        format!("{:.1} years", seconds / YEAR)
    } else {
        "Centuries".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_zero_charset() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(0, 26), 0.0);
    }

    #[test]
    fn test_entropy_known_values() {
        // 8 lowercase characters: 8 * log2(26) = 37.6035...
        let entropy = entropy_bits(8, 26);
        assert!((entropy - 37.6035).abs() < 0.001);

        // Full 94-character set, 12 characters: 12 * log2(94) = 78.6625...
        let entropy = entropy_bits(12, 94);
        assert!((entropy - 78.6625).abs() < 0.001);
    }

    #[test]
    fn test_entropy_monotonic_in_length() {
        let mut previous = 0.0;
        for length in 1..=64 {
            let entropy = entropy_bits(length, 62);
            assert!(entropy > previous);
            previous = entropy;
        }
    }

    #[test]
    fn test_crack_time_instantly() {
        assert_eq!(estimate_crack_time(0.0), "Instantly");
        assert_eq!(estimate_crack_time(10.0), "Instantly");
    }

    #[test]
    fn test_crack_time_seconds() {
        // 2^36 / 2e9 = 34.36 seconds
        assert_eq!(estimate_crack_time(36.0), "34.4 seconds");
    }

    #[test]
    fn test_crack_time_minutes() {
        // 2^40 / 2e9 = 549.8 seconds = 9.2 minutes
        assert_eq!(estimate_crack_time(40.0), "9.2 minutes");
    }

    #[test]
    fn test_crack_time_hours() {
        // 2^47 / 2e9 = 70368.7 seconds = 19.5 hours
        assert_eq!(estimate_crack_time(47.0), "19.5 hours");
    }

    #[test]
    fn test_crack_time_days() {
        // 2^52 / 2e9 = 2251799.8 seconds = 26.1 days
        assert_eq!(estimate_crack_time(52.0), "26.1 days");
    }

    #[test]
    fn test_crack_time_years() {
        // 2^60 / 2e9 = 576460752.3 seconds = 18.3 years
        assert_eq!(estimate_crack_time(60.0), "18.3 years");
    }

    #[test]
    fn test_crack_time_centuries() {
        assert_eq!(estimate_crack_time(100.0), "Centuries");
        assert_eq!(estimate_crack_time(256.0), "Centuries");
    }
}
