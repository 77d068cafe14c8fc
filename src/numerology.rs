// 🔢 Numeric Helpers - digit reduction and digit-shape predicates

/// Master numbers are exempt from further reduction
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

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

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Numerological reduction.
///
/// Sums decimal digits until the value is a single digit or a master
/// number. The master check applies to every intermediate sum, so 29
/// reduces to 11 and stops there.
pub fn digit_sum(n: u32) -> u32 {
    let mut current = n;
    while current > 9 && !is_master_number(current) {
        current = digits(current).iter().sum();
    }
    current
}

/// True when any decimal digit appears more than once
pub fn has_repeated_digits(n: u32) -> bool {
    let mut seen = [false; 10];
    for d in digits(n) {
        let slot = &mut seen[d as usize];
        if *slot {
            return true;
        }
        *slot = true;
    }
    false
}

/// True for an ascending run where each value is one more than the last.
/// Needs at least two values.
pub fn are_sequential(values: &[u32]) -> bool {
    values.len() >= 2 && values.windows(2).all(|w| w[1] == w[0] + 1)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum_reduces_to_single_digit() {
        assert_eq!(digit_sum(1990), 1); // 1990 -> 19 -> 10 -> 1
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(2004), 6);
    }

    #[test]
    fn test_digit_sum_stops_at_master_numbers() {
        assert_eq!(digit_sum(29), 11);
        assert_eq!(digit_sum(2009), 11);
        assert_eq!(digit_sum(1993), 22);
        assert_eq!(digit_sum(33), 33);
        assert_eq!(digit_sum(11), 11);
    }

    #[test]
    fn test_master_numbers() {
        assert!(is_master_number(11));
        assert!(is_master_number(22));
        assert!(is_master_number(33));
        assert!(!is_master_number(44));
        assert!(!is_master_number(1));
    }

    #[test]
    fn test_repeated_digits() {
        assert!(has_repeated_digits(11));
        assert!(has_repeated_digits(1990));
        assert!(has_repeated_digits(101));
        assert!(!has_repeated_digits(12));
        assert!(!has_repeated_digits(7));
    }

    #[test]
    fn test_sequential() {
        assert!(are_sequential(&[7, 8]));
        assert!(are_sequential(&[1, 2, 3, 4]));
        assert!(!are_sequential(&[8, 7]));
        assert!(!are_sequential(&[1, 3]));
        assert!(!are_sequential(&[5]));
        assert!(!are_sequential(&[]));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(1990), vec![1, 9, 9, 0]);
        assert_eq!(digits(0), vec![0]);
    }
}
