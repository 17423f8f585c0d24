use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use crate::error::{Error, Result};

/// The length used when nothing else is asked for.
pub const DEFAULT_LENGTH: usize = 32;

/// Digits, uppercase and lowercase ascii letters.
pub const BASIC_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The basic alphabet followed by the 32 ascii punctuation characters.
pub const STRONG_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which characters a generated password may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterPolicy {
    /// `0-9`, `A-Z` and `a-z`
    #[default]
    Basic,
    /// Everything in `Basic` plus ascii punctuation
    Strong,
}

impl CharacterPolicy {
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Basic => BASIC_ALPHABET,
            Self::Strong => STRONG_ALPHABET,
        }
    }

    /// The name used in settings files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for CharacterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CharacterPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "strong" => Ok(Self::Strong),
            other => Err(Error::GenericDyn(format!(
                "unknown character policy '{other}', expected 'basic' or 'strong'"
            ))),
        }
    }
}

/// A generated password. The characters are wiped from memory when it's dropped and it's
/// never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Checks that a length is a positive integer and returns it as a `usize`.
pub fn validate_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(Error::InvalidLength(length.to_string()));
    }
    usize::try_from(length).map_err(|_| Error::InvalidLength(length.to_string()))
}

/// Parses user input, like the content of a text field, into a password length.
pub fn parse_length(input: &str) -> Result<usize> {
    let length: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidLength(input.to_owned()))?;

    validate_length(length).map_err(|_| Error::InvalidLength(input.to_owned()))
}

/// Generates a password using the thread local random number generator from `rand`.
///
/// That generator is a general purpose one, it's seeded from the operating system but the
/// output hasn't been audited for use as key material.
pub fn password_generator(length: usize, policy: CharacterPolicy) -> Result<Password> {
    password_generator_with_rng(&mut rand::thread_rng(), length, policy)
}

/// Generates a password by drawing `length` characters uniformly, with replacement, from the
/// alphabet of `policy`.
pub fn password_generator_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    policy: CharacterPolicy,
) -> Result<Password> {
    if length == 0 {
        return Err(Error::InvalidLength(length.to_string()));
    }
    debug!("generating a password of length {length} with the {policy} policy");

    let alphabet = policy.alphabet().as_bytes();
    let password: String = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect();

    Ok(Password(password))
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_tests;
