use crate::{
    clipboard::{copy_password, Clipboard, Error, Result},
    password_generator::{password_generator, CharacterPolicy},
};

#[derive(Default)]
struct MockClipboard {
    content: Vec<String>,
    fail: bool,
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Generic("no clipboard"));
        }
        self.content.push(text.to_owned());
        Ok(())
    }
}

#[test]
fn copy_without_password_is_noop() {
    let mut clipboard = MockClipboard::default();

    assert!(!copy_password(&mut clipboard, None).unwrap());
    assert!(clipboard.content.is_empty());
}

#[test]
fn copy_puts_password_on_clipboard() {
    let mut clipboard = MockClipboard::default();
    let password = password_generator(16, CharacterPolicy::Strong).unwrap();

    assert!(copy_password(&mut clipboard, Some(&password)).unwrap());
    assert_eq!(vec![password.as_str().to_owned()], clipboard.content);
}

#[test]
fn copy_reports_clipboard_errors() {
    let mut clipboard = MockClipboard {
        fail: true,
        ..Default::default()
    };
    let password = password_generator(16, CharacterPolicy::Basic).unwrap();

    assert!(copy_password(&mut clipboard, Some(&password)).is_err());
}
