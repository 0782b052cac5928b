// Theme preference.
// Binary light/dark flag persisted as a one-line file under the platform
// config directory; restored once at startup, written on every toggle.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::Result;

/// Visual theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything but "dark" is light.
    pub fn from_persisted(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Path to the persisted theme file (~/.config/stepdeck/theme on Linux).
pub fn theme_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "stepdeck").map(|dirs| dirs.config_dir().join("theme"))
}

/// Read the persisted theme, defaulting to light if absent or unrecognized.
/// Never writes.
pub fn restore(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(value) => Theme::from_persisted(&value),
        Err(_) => Theme::Light,
    }
}

/// Persist the theme flag.
pub fn persist(path: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, theme.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_restore_defaults_to_light() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme");

        assert_eq!(restore(&path), Theme::Light);

        fs::write(&path, "purple").unwrap();
        assert_eq!(restore(&path), Theme::Light);

        fs::write(&path, "dark\n").unwrap();
        assert_eq!(restore(&path), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme");

        // Toggle twice from the default: back to light, and that is what
        // ends up persisted.
        let mut theme = restore(&path);
        theme = theme.toggled();
        persist(&path, theme).unwrap();
        theme = theme.toggled();
        persist(&path, theme).unwrap();

        assert_eq!(theme, Theme::Light);
        assert_eq!(fs::read_to_string(&path).unwrap(), "light");
    }
}
