//! Application settings (database location, error policy).
//!
//! The settings file lives at `~/.config/reelbook/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/home/me/movies.db"
//!
//! [session]
//! on_error = "continue"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::session::ErrorPolicy;

/// Database file used when neither the CLI nor the settings file names one.
pub const DEFAULT_DATABASE_FILE: &str = "movies.db";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub on_error: Option<ErrorPolicy>,
}

/// Canonical path to the settings file: `~/.config/reelbook/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reelbook").join("settings.toml")
}

/// Read settings from `path`. A missing file yields `Ok(None)`.
pub fn read_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
}

/// Load settings from the canonical location, falling back to defaults
/// when the file is absent or broken.
pub fn load_settings() -> Settings {
    let path = settings_path();
    match read_settings(&path) {
        Ok(Some(settings)) => {
            log::debug!("Loaded settings from {}", path.display());
            settings
        }
        Ok(None) => Settings::default(),
        Err(e) => {
            log::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `database.path` in `settings.toml`
/// 3. `movies.db` in the current directory
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = settings.database.path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return p.clone();
    }
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

/// `--keep-going` wins; otherwise `session.on_error`, defaulting to abort.
pub fn resolve_error_policy(keep_going: bool, settings: &Settings) -> ErrorPolicy {
    if keep_going {
        return ErrorPolicy::Continue;
    }
    settings.session.on_error.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = read_settings(&dir.path().join("nope.toml")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn reads_full_settings() {
        let (_dir, path) = write_settings(
            "[database]\npath = \"/tmp/films.db\"\n\n[session]\non_error = \"continue\"\n",
        );
        let settings = read_settings(&path).unwrap().unwrap();
        assert_eq!(settings.database.path, Some(PathBuf::from("/tmp/films.db")));
        assert_eq!(settings.session.on_error, Some(ErrorPolicy::Continue));
    }

    #[test]
    fn partial_settings_use_defaults() {
        let (_dir, path) = write_settings("[session]\non_error = \"abort\"\n");
        let settings = read_settings(&path).unwrap().unwrap();
        assert_eq!(settings.database.path, None);
        assert_eq!(settings.session.on_error, Some(ErrorPolicy::Abort));
    }

    #[test]
    fn malformed_settings_are_a_parse_error() {
        let (_dir, path) = write_settings("[session]\non_error = \"sometimes\"\n");
        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn database_path_priority() {
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/data/films.db")),
            },
            ..Default::default()
        };

        assert_eq!(
            resolve_database_path(Some(PathBuf::from("cli.db")), &settings),
            PathBuf::from("cli.db")
        );
        assert_eq!(
            resolve_database_path(None, &settings),
            PathBuf::from("/data/films.db")
        );
        assert_eq!(
            resolve_database_path(None, &Settings::default()),
            PathBuf::from(DEFAULT_DATABASE_FILE)
        );
    }

    #[test]
    fn empty_database_path_falls_back_to_default() {
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::new()),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_database_path(None, &settings),
            PathBuf::from(DEFAULT_DATABASE_FILE)
        );
    }

    #[test]
    fn error_policy_resolution() {
        let lenient = Settings {
            session: SessionSettings {
                on_error: Some(ErrorPolicy::Continue),
            },
            ..Default::default()
        };
        assert_eq!(resolve_error_policy(false, &Settings::default()), ErrorPolicy::Abort);
        assert_eq!(resolve_error_policy(true, &Settings::default()), ErrorPolicy::Continue);
        assert_eq!(resolve_error_policy(false, &lenient), ErrorPolicy::Continue);
    }
}
