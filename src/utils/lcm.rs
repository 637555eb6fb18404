use crate::models::TimeStep;
use gcd::Gcd;

fn lcm(a: TimeStep, b: TimeStep) -> Option<TimeStep> {
    (a / a.gcd(b)).checked_mul(b)
}

/// Hyperperiod of a list of periods; 1 for an empty list, `None` when it
/// does not fit in a `TimeStep`.
pub fn multiple_lcm(numbers: &[TimeStep]) -> Option<TimeStep> {
    numbers.iter().try_fold(1, |acc, &x| lcm(acc, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_lcm() {
        assert_eq!(multiple_lcm(&[2, 3, 4]), Some(12));
        assert_eq!(multiple_lcm(&[5]), Some(5));
        assert_eq!(multiple_lcm(&[]), Some(1));
    }

    #[test]
    fn test_multiple_lcm_overflow() {
        // Pairwise coprime, product above 2^64.
        assert_eq!(multiple_lcm(&[1_000_003, 1_000_033, 1_000_037, 1_000_039]), None);
        assert_eq!(multiple_lcm(&[TimeStep::MAX, 2]), None);
    }
}
