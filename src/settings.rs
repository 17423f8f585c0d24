use std::path::{Path, PathBuf};

use log::debug;

pub use crate::error::{Error, Result};
use crate::password_generator::{validate_length, CharacterPolicy, DEFAULT_LENGTH};

/// Defaults for the interactive front end, read from `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub policy: CharacterPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            policy: CharacterPolicy::Basic,
        }
    }
}

/// Where the settings file lives, `$XDG_CONFIG_HOME/passgen/settings.toml` if that is set,
/// otherwise `$HOME/.config/passgen/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home {
        Some(p) => p.clone(),
        None => match home {
            Some(h) => h.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_home.join("passgen").join("settings.toml"))
}

fn file_settings(path: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(path.to_path_buf())
}

/// Reads the settings file, falls back on defaults for everything that isn't set.
pub fn read_config(home: &Option<PathBuf>, xdg_config_home: &Option<PathBuf>) -> Result<Settings> {
    let mut settings = config::Config::default();
    settings.set_default("length", DEFAULT_LENGTH as i64)?;
    settings.set_default("policy", CharacterPolicy::Basic.name())?;

    match xdg_config_file_location(home, xdg_config_home) {
        Ok(path) if path.exists() => {
            debug!("reading settings from {}", path.display());
            settings.merge(file_settings(&path))?;
        }
        Ok(path) => debug!("no settings file at {}, using defaults", path.display()),
        Err(_) => debug!("no home directory, using default settings"),
    }

    Ok(Settings {
        length: validate_length(settings.get_int("length")?)?,
        policy: settings.get_str("policy")?.parse()?,
    })
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
