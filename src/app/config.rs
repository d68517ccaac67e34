use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RpsError};
use crate::ui::{Column, MAX_CMD_WIDTH};
use crate::utils::text_width;

const DEFAULT_PROC_ROOT: &str = "/proc";

/// Runtime configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub proc_root: PathBuf,
    pub max_comm_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(FileConfig::default())
    }
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    general: GeneralConfig,
    display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeneralConfig {
    proc_root: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplayConfig {
    max_comm_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_comm_width: MAX_CMD_WIDTH,
        }
    }
}

impl Config {
    /// Build the configuration from the config file and `env::args`.
    ///
    /// `Err` carries the text to print: usage for `--help`, or the problem
    /// followed by usage.
    pub fn from_args() -> std::result::Result<Self, String> {
        let file_config = match config_path() {
            Some(path) => load_config_file(&path).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring configuration file");
                FileConfig::default()
            }),
            None => FileConfig::default(),
        };

        match Self::parse(env::args().skip(1), file_config) {
            Ok(Some(config)) => Ok(config),
            Ok(None) => Err(usage()),
            Err(err) => Err(format!("{err}\n\n{}", usage())),
        }
    }

    fn from_file(file_config: FileConfig) -> Self {
        Self {
            proc_root: file_config.general.proc_root,
            max_comm_width: normalize_comm_width(file_config.display.max_comm_width),
        }
    }

    /// Apply command-line overrides on top of the file config.
    /// `Ok(None)` means help was requested.
    fn parse(
        args: impl IntoIterator<Item = String>,
        file_config: FileConfig,
    ) -> Result<Option<Self>> {
        let mut config = Self::from_file(file_config);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(None),
                "--proc-root" => {
                    let value = args
                        .next()
                        .ok_or_else(|| RpsError::config("Missing value for --proc-root"))?;
                    config.proc_root = PathBuf::from(value);
                }
                "--comm-width" => {
                    let value = args
                        .next()
                        .ok_or_else(|| RpsError::config("Missing value for --comm-width"))?;
                    let width = value
                        .parse::<usize>()
                        .map_err(|_| RpsError::config(format!("Invalid comm width: {value}")))?;
                    config.max_comm_width = normalize_comm_width(width);
                }
                _ => return Err(RpsError::invalid_argument(arg)),
            }
        }

        Ok(Some(config))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rps").join("config.toml"))
}

/// A missing file yields the defaults; an unreadable or invalid one is an error.
fn load_config_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| RpsError::config_invalid(path.to_path_buf(), err.to_string()))
}

fn usage() -> String {
    let config_location = config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/rps/config.toml".to_string());

    [
        "Usage: rps [options]",
        "",
        "Lists running processes as an aligned table.",
        "",
        "Options:",
        "  --proc-root <path>   Process information root (default: /proc)",
        "  --comm-width <n>     Maximum COMM column width (default: 15, min: 4)",
        "  -h, --help           Show this help",
        "",
        &format!("Config file: {config_location}"),
        "",
        "Example config.toml:",
        "  [general]",
        "  proc_root = \"/proc\"",
        "",
        "  [display]",
        "  max_comm_width = 15",
        "",
        "Set RPS_LOG=debug to log skipped processes to stderr.",
    ]
    .join("\n")
}

fn normalize_comm_width(value: usize) -> usize {
    value.max(text_width(Column::Command.label()))
}
