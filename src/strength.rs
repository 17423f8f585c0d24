use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// A symbol is anything that isn't a letter, a number or an underscore. Combining marks and
/// connector punctuation other than `_` count as symbols, numerals like `²` don't.
fn is_symbol(c: char) -> bool {
    c != '_' && !c.is_alphanumeric()
}

/// How strong a password is judged to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// The value, between 0 and 100, that a strength indicator should be filled to.
    pub fn weight(self) -> u8 {
        match self {
            Self::Weak => 30,
            Self::Moderate => 60,
            Self::Strong => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn of(password: &str) -> Self {
        Self {
            lowercase: LOWERCASE.is_match(password),
            uppercase: UPPERCASE.is_match(password),
            digit: DIGIT.is_match(password),
            symbol: password.chars().any(is_symbol),
        }
    }

    /// Number of classes present, 0 to 4.
    pub fn score(&self) -> u8 {
        [self.lowercase, self.uppercase, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count() as u8
    }
}

/// The result of evaluating a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthVerdict {
    pub strength: Strength,
    pub weight: u8,
}

impl From<Strength> for StrengthVerdict {
    fn from(strength: Strength) -> Self {
        Self {
            strength,
            weight: strength.weight(),
        }
    }
}

/// Scores a password from its length, counted in characters, and the character classes in it.
///
/// Strong needs at least 12 characters and all four classes, Moderate at least 8 characters
/// and three classes, everything else is Weak.
pub fn evaluate(password: &str) -> StrengthVerdict {
    let length = password.chars().count();
    let score = CharacterClasses::of(password).score();

    let strength = if length >= 12 && score == 4 {
        Strength::Strong
    } else if length >= 8 && score >= 3 {
        Strength::Moderate
    } else {
        Strength::Weak
    };

    strength.into()
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength_tests;
