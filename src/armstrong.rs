//! Armstrong number check: digit extraction, exact integer powers, and input
//! parsing for the `armstrong` binary.
//!
//! An Armstrong number equals the sum of its decimal digits, each raised to
//! the power of the digit count (153 = 1^3 + 5^3 + 3^3). Digit powers are
//! computed with integer exponentiation only; a floating-point `pow` would
//! round for large digit counts.

use anyhow::{bail, Context, Result};

/// Count the decimal digits of `n`. Zero is a one-digit number.
pub fn digit_count(n: u64) -> u32 {
    if n == 0 {
        return 1;
    }

    let mut remaining = n;
    let mut count = 0;
    while remaining > 0 {
        remaining /= 10;
        count += 1;
    }
    count
}

/// Check whether `n` equals the sum of its digits raised to the digit count.
///
/// The original value is never touched; digit extraction runs on a working
/// copy (least-significant digit via `% 10`, then drop it with `/ 10`). The
/// sum accumulates in `u128` so no `u64` input can overflow it: the worst
/// case is twenty digits of 9^20, well inside `u128`.
pub fn is_armstrong(n: u64) -> bool {
    let count = digit_count(n);

    let mut working = n;
    let mut sum: u128 = 0;
    while working > 0 {
        let digit = working % 10;
        sum += (digit as u128).pow(count);
        working /= 10;
    }

    sum == n as u128
}

/// Parse one line of user input into the non-negative integer domain.
///
/// # Errors
///
/// Returns an error for empty input, negative numbers, and anything that is
/// not a base-10 integer. The messages are user-facing; the binary reports
/// them and exits non-zero instead of panicking.
pub fn parse_input(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        bail!("expected a number, got empty input");
    }
    if trimmed.starts_with('-') {
        bail!("'{}' is negative; Armstrong numbers are defined for non-negative integers", trimmed);
    }

    trimmed
        .parse::<u64>()
        .with_context(|| format!("'{}' is not a whole number", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(9474), 4);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_single_digits_are_armstrong() {
        // Every single-digit number is d^1 = d.
        for n in 0..=9 {
            assert!(is_armstrong(n), "{} should be an Armstrong number", n);
        }
    }

    #[test]
    fn test_known_armstrong_numbers() {
        for n in [153, 370, 371, 407, 9474] {
            assert!(is_armstrong(n), "{} should be an Armstrong number", n);
        }
    }

    #[test]
    fn test_known_non_armstrong_numbers() {
        for n in [10, 100, 152, 9475] {
            assert!(!is_armstrong(n), "{} should not be an Armstrong number", n);
        }
    }

    #[test]
    fn test_large_input_does_not_overflow() {
        // Exercises the full 20-digit accumulation path.
        assert!(!is_armstrong(u64::MAX));
    }

    #[test]
    fn test_parse_valid_input() {
        assert_eq!(parse_input("153").unwrap(), 153);
        assert_eq!(parse_input("  9474\t").unwrap(), 9474);
        assert_eq!(parse_input("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = parse_input("   ").unwrap_err();
        assert!(err.to_string().contains("empty input"));
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_input("-5").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_input("hello").is_err());
        assert!(parse_input("12.5").is_err());
        assert!(parse_input("1e3").is_err());
    }
}
