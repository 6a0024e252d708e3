//! Heuristic strength scoring.
//!
//! Seven independent checks, each worth the same. The score is the share of
//! passing checks scaled to 0..=100; the label is a threshold on that score.

use std::fmt;

use log::trace;

/// Number of checks in the battery.
pub const CHECKS: usize = 7;

/// Scores below this are `Weak`.
pub const FAIR_THRESHOLD: f64 = 30.0;
/// Scores below this are `Fair`.
pub const GOOD_THRESHOLD: f64 = 60.0;
/// Scores below this are `Good`, at or above `Strong`.
pub const STRONG_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Label {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Label {
    pub fn from_score(score: f64) -> Self {
        if score < FAIR_THRESHOLD {
            Label::Weak
        } else if score < GOOD_THRESHOLD {
            Label::Fair
        } else if score < STRONG_THRESHOLD {
            Label::Good
        } else {
            Label::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Weak => "Weak",
            Label::Fair => "Fair",
            Label::Good => "Good",
            Label::Strong => "Strong",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    /// 0.0..=100.0, unrounded.
    pub score: f64,
    pub label: Label,
    /// How many of the `CHECKS` passed.
    pub passed: usize,
}

/// Outcome of each check, in battery order.
pub fn checks(password: &str) -> [bool; CHECKS] {
    let len = password.chars().count();
    [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        len >= 16,
    ]
}

pub fn score(password: &str) -> Strength {
    let passed = checks(password).iter().filter(|&&ok| ok).count();
    let score = (passed as f64 / CHECKS as f64).min(1.0) * 100.0;
    trace!("strength: {}/{} checks passed", passed, CHECKS);
    Strength {
        score,
        label: Label::from_score(score),
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_weak_zero() {
        let s = score("");
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, Label::Weak);
        assert_eq!(s.passed, 0);
    }

    #[test]
    fn sixteen_lowercase_is_fair() {
        let s = score("aaaaaaaaaaaaaaaa");
        assert_eq!(s.passed, 4);
        assert!((s.score - 400.0 / 7.0).abs() < 1e-9);
        assert_eq!(s.label, Label::Fair);
    }

    #[test]
    fn every_class_sixteen_long_is_strong() {
        let s = score("Aa1!Aa1!Aa1!Aa1!");
        assert_eq!(s.passed, CHECKS);
        assert_eq!(s.score, 100.0);
        assert_eq!(s.label, Label::Strong);
    }

    #[test]
    fn check_order() {
        assert_eq!(
            checks("Abc12345"),
            [true, false, true, true, true, false, false]
        );
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert!(checks("é")[5]);
        assert!(!checks("abc")[5]);
    }

    #[test]
    fn labels_follow_thresholds() {
        assert_eq!(Label::from_score(29.9), Label::Weak);
        assert_eq!(Label::from_score(FAIR_THRESHOLD), Label::Fair);
        assert_eq!(Label::from_score(59.9), Label::Fair);
        assert_eq!(Label::from_score(GOOD_THRESHOLD), Label::Good);
        assert_eq!(Label::from_score(79.9), Label::Good);
        assert_eq!(Label::from_score(STRONG_THRESHOLD), Label::Strong);
        assert_eq!(Label::from_score(100.0), Label::Strong);
    }

    #[test]
    fn partial_batteries() {
        // 12 chars with all four classes: 6 of 7 checks
        let s = score("Aa1!Aa1!Aa1!");
        assert_eq!(s.passed, 6);
        assert_eq!(s.label, Label::Strong);
        // 8 lowercase+digits: 3 of 7
        assert_eq!(score("abcd1234").label, Label::Fair);
    }
}
