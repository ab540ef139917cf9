use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a student records session.
///
/// Controls where exports are written and how listings are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The name of the file the record list is exported to.
    export_file_name: String,

    /// Terminal width (in columns) below which listings are rendered as
    /// cards rather than as a table.
    narrow_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_file_name: default_export_file_name(),
            narrow_width: default_narrow_width(),
        }
    }
}

/// Errors that can occur when reading or writing a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a valid configuration.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The file could not be written.
    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The name of the export file.
    #[must_use]
    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    /// Sets the name of the export file.
    pub fn set_export_file_name(&mut self, name: String) {
        self.export_file_name = name;
    }

    /// The width below which listings render as cards.
    #[must_use]
    pub const fn narrow_width(&self) -> u16 {
        self.narrow_width
    }

    /// Returns `true` if a terminal of the given width should get the narrow
    /// (card) layout.
    #[must_use]
    pub const fn is_narrow(&self, width: u16) -> bool {
        width < self.narrow_width
    }
}

fn default_export_file_name() -> String {
    "students_data.txt".to_string()
}

const fn default_narrow_width() -> u16 {
    60
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_export_file_name")]
        export_file_name: String,

        #[serde(default = "default_narrow_width")]
        narrow_width: u16,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                export_file_name,
                narrow_width,
            } => Self {
                export_file_name,
                narrow_width,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            export_file_name: config.export_file_name,
            narrow_width: config.narrow_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nexport_file_name = \"class.json\"\nnarrow_width = 80\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.export_file_name(), "class.json");
        assert_eq!(config.narrow_width(), 80);
        assert!(config.is_narrow(79));
        assert!(!config.is_narrow(80));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nnarrow_width = \"wide\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.export_file_name(), "students_data.txt");
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("students.toml");

        let mut config = Config::default();
        config.set_export_file_name("roster.txt".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
