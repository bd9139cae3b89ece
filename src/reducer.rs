// 🔢 Digit Reducer
// Repeated digit-summing until a single digit or a master number is reached

use crate::error::{EngineError, Result};

/// Master numbers halt reduction even though they have two digits
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Every value a reduced number can take, in display order
pub fn all_numbers() -> Vec<u32> {
    (1..=9).chain(MASTER_NUMBERS).collect()
}

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// True when `n` is a final result: 1-9 or a master number
pub fn is_reduced(n: u32) -> bool {
    (1..=9).contains(&n) || is_master_number(n)
}

/// Decimal digits of `n`, most significant first
pub fn digits(n: u32) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }

    let mut out = Vec::new();
    let mut rest = n;
    while rest > 0 {
        out.push(rest % 10);
        rest /= 10;
    }
    out.reverse();
    out
}

/// Sum of the decimal digits of `n` (one pass, no reduction)
pub fn digit_sum(n: u32) -> u32 {
    let mut sum = 0;
    let mut rest = n;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Reduce a positive integer to 1-9 or a master number.
///
/// Master numbers are frozen at every call site, so `reduce(29)` is 11 and
/// stays 11. Zero is outside the domain and is rejected.
pub fn reduce(n: u32) -> Result<u32> {
    if n == 0 {
        return Err(EngineError::ZeroValue);
    }

    let mut current = n;
    while current >= 10 && !is_master_number(current) {
        current = digit_sum(current);
    }
    Ok(current)
}

/// Human-readable trace of a reduction, e.g. `2062 → 2 + 0 + 6 + 2 = 10 → 1 + 0 = 1`
pub fn show_reduction(n: u32) -> String {
    if is_reduced(n) || n == 0 {
        return n.to_string();
    }

    let mut out = n.to_string();
    let mut current = n;
    while current >= 10 && !is_master_number(current) {
        let parts: Vec<String> = digits(current).iter().map(|d| d.to_string()).collect();
        current = digit_sum(current);
        out.push_str(&format!(" → {} = {}", parts.join(" + "), current));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits_unchanged() {
        for n in 1..=9 {
            assert_eq!(reduce(n).unwrap(), n);
        }
    }

    #[test]
    fn test_master_numbers_are_fixed_points() {
        assert_eq!(reduce(11).unwrap(), 11);
        assert_eq!(reduce(22).unwrap(), 22);
        assert_eq!(reduce(33).unwrap(), 33);
    }

    #[test]
    fn test_reduce_multi_step() {
        assert_eq!(reduce(44).unwrap(), 8);
        assert_eq!(reduce(2062).unwrap(), 1);
        assert_eq!(reduce(2037).unwrap(), 3);
        assert_eq!(reduce(2049).unwrap(), 6);
        // 29 → 11, frozen
        assert_eq!(reduce(29).unwrap(), 11);
        // 9999 → 36 → 9
        assert_eq!(reduce(9999).unwrap(), 9);
        // 1993 → 22
        assert_eq!(reduce(1993).unwrap(), 22);
    }

    #[test]
    fn test_reduce_zero_is_error() {
        assert_eq!(reduce(0), Err(EngineError::ZeroValue));
    }

    #[test]
    fn test_reduce_range_and_idempotence() {
        for n in 1..5000 {
            let r = reduce(n).unwrap();
            assert!(is_reduced(r), "reduce({}) = {} is out of range", n, r);
            assert_eq!(reduce(r).unwrap(), r);
        }
        assert!(is_reduced(reduce(u32::MAX).unwrap()));
    }

    #[test]
    fn test_digit_sum_and_digits() {
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digits(2024), vec![2, 0, 2, 4]);
        assert_eq!(digits(0), vec![0]);
    }

    #[test]
    fn test_all_numbers() {
        assert_eq!(all_numbers(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33]);
    }

    #[test]
    fn test_show_reduction() {
        assert_eq!(show_reduction(7), "7");
        assert_eq!(show_reduction(11), "11");
        assert_eq!(show_reduction(44), "44 → 4 + 4 = 8");
        assert_eq!(show_reduction(2062), "2062 → 2 + 0 + 6 + 2 = 10 → 1 + 0 = 1");
        assert_eq!(show_reduction(29), "29 → 2 + 9 = 11");
    }
}
