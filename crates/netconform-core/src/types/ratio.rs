//! Exact ratios for threshold comparisons.

use std::fmt;

/// A non-negative fraction `numerator / denominator`.
///
/// Comparisons are done by cross-multiplication so a count ratio sitting
/// exactly on the threshold (e.g. 2 of 6 against 1/3) is never lost to
/// floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    /// Create a ratio. A zero denominator is clamped to 1.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        let denominator = if denominator == 0 { 1 } else { denominator };
        Self {
            numerator,
            denominator,
        }
    }

    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns true if `part / whole <= self`. An empty `whole` is never
    /// within any ratio.
    pub fn admits(&self, part: usize, whole: usize) -> bool {
        if whole == 0 {
            return false;
        }
        let part = part as u128;
        let whole = whole as u128;
        part * self.denominator as u128 <= whole * self.numerator as u128
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_boundary_is_admitted() {
        let third = Ratio::new(1, 3);
        assert!(third.admits(2, 6));
        assert!(third.admits(1, 3));
        assert!(!third.admits(3, 8));
    }

    #[test]
    fn test_empty_whole_rejected() {
        assert!(!Ratio::new(1, 3).admits(0, 0));
    }

    #[test]
    fn test_zero_denominator_clamped() {
        let r = Ratio::new(1, 0);
        assert_eq!(r.denominator(), 1);
        assert!(r.admits(5, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ratio::new(1, 3).to_string(), "1/3");
    }
}
