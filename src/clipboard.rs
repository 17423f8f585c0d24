use log::info;

pub use crate::error::{Error, Result};
use crate::password_generator::Password;

/// Somewhere a password can be copied to.
pub trait Clipboard {
    /// Replaces the content of the clipboard with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the desktop session. The connection is opened on first use and then kept,
/// some platforms drop the content when the last connection goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => Ok(clipboard.set_text(text)?),
            None => Err(Error::Generic("clipboard not available")),
        }
    }
}

/// Copies `password` to the clipboard. Returns false, and leaves the clipboard alone, when
/// there isn't a password.
pub fn copy_password(clipboard: &mut dyn Clipboard, password: Option<&Password>) -> Result<bool> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(false),
    };

    clipboard.set_text(password.as_str())?;
    info!("copied password to the clipboard");

    Ok(true)
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod clipboard_tests;
