use crate::consts;
use crate::engine::{Bounds, BoundsError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Settings for the playing field
    #[serde(default)]
    pub(crate) grid: GridConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct GridConfig {
    /// Number of columns
    pub(crate) width: u16,

    /// Number of rows
    pub(crate) height: u16,

    /// Whether to start with grid lines shown
    pub(crate) show_lines: bool,
}

impl GridConfig {
    /// Validate the configured dimensions
    pub(crate) fn bounds(&self) -> Result<Bounds, ConfigError> {
        if self.width > consts::MAX_GRID_SIZE.width || self.height > consts::MAX_GRID_SIZE.height {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Bounds::new(self.width, self.height).map_err(Into::into)
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::DEFAULT_GRID_SIZE.width,
            height: consts::DEFAULT_GRID_SIZE.height,
            show_lines: false,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "grid size {width}x{height} does not fit on screen; maximum is {max_width}x{max_height}",
        max_width = consts::MAX_GRID_SIZE.width,
        max_height = consts::MAX_GRID_SIZE.height
    )]
    TooLarge { width: u16, height: u16 },
    #[error("invalid grid size")]
    Bounds(#[from] BoundsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn load_empty() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "").unwrap();
        assert_eq!(Config::load(&path, false).unwrap(), Config::default());
    }

    #[test]
    fn load_full() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            "[grid]\nwidth = 20\nheight = 10\nshow-lines = true\n",
        )
        .unwrap();
        assert_eq!(
            Config::load(&path, false).unwrap(),
            Config {
                grid: GridConfig {
                    width: 20,
                    height: 10,
                    show_lines: true,
                }
            }
        );
    }

    #[test]
    fn load_partial() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[grid]\nshow-lines = true\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.grid.width, consts::DEFAULT_GRID_SIZE.width);
        assert_eq!(cfg.grid.height, consts::DEFAULT_GRID_SIZE.height);
        assert!(cfg.grid.show_lines);
    }

    #[rstest]
    #[case("[grid]\nwidth = \"wide\"\n")]
    #[case("[grid]\nspeed = 3\n")]
    #[case("[grid]\nwidth = -1\n")]
    #[case("[colors]\nsnake = \"green\"\n")]
    fn load_invalid(#[case] src: &str) {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, src).unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn default_bounds() {
        let bounds = GridConfig::default().bounds().unwrap();
        assert_eq!(bounds.size(), consts::DEFAULT_GRID_SIZE);
    }

    #[rstest]
    #[case(78, 19, true)]
    #[case(3, 1, true)]
    #[case(79, 10, false)]
    #[case(10, 20, false)]
    #[case(2, 10, false)]
    #[case(10, 0, false)]
    fn test_bounds(#[case] width: u16, #[case] height: u16, #[case] ok: bool) {
        let grid = GridConfig {
            width,
            height,
            show_lines: false,
        };
        assert_eq!(grid.bounds().is_ok(), ok);
    }

    #[test]
    fn too_large_message() {
        let grid = GridConfig {
            width: 100,
            height: 10,
            show_lines: false,
        };
        assert_eq!(
            grid.bounds().unwrap_err().to_string(),
            "grid size 100x10 does not fit on screen; maximum is 78x19"
        );
    }
}
