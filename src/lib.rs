/// Generates random passwords from a fixed alphabet, either letters and digits or letters,
/// digits and punctuation.
pub mod password_generator;
/// Heuristic strength rating of a password, based on its length and which character classes
/// it contains.
pub mod strength;
/// Copying passwords to the clipboard of the desktop session.
pub mod clipboard;
/// Defaults for the interactive front end.
pub mod settings;

pub(crate) mod error;

pub use error::{Error, Result};
