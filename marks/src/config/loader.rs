//! Configuration file discovery and loading.
//!
//! Two files are looked for: the user config under the home directory and a
//! `marks.yaml` in the working directory.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".marks";

/// File name of the user config inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of the working-directory config.
pub const LOCAL_CONFIG_FILE: &str = "marks.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use marks::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.marks/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use marks::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Looks for:
    /// 1. User config at `~/.marks/config.yaml` (precedence 1)
    /// 2. `marks.yaml` in `working_dir` (precedence 2)
    ///
    /// `config_dir` replaces `~/.marks` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        let local = working_dir.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            let config = Self::load_file(&local)?;
            sources.push(ConfigSource {
                path: local,
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;

        // An empty file is an empty config, not a parse error
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("invalid YAML: {e}"),
        })
    }

    /// Path of the user config, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "history_limit: [not, a, number]").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let user_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        fs::write(user_dir.path().join(USER_CONFIG_FILE), "history_limit: 5\n").unwrap();
        fs::write(work_dir.path().join(LOCAL_CONFIG_FILE), "history_limit: 9\n").unwrap();

        let sources = ConfigLoader::load_all(work_dir.path(), Some(user_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].config.history_limit, Some(9));
    }

    #[test]
    fn test_load_all_without_files() {
        let user_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(work_dir.path(), Some(user_dir.path())).unwrap();
        assert!(sources.is_empty());
    }
}
