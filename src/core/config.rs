//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.tui-2048/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.
//!
//! Theme colours stay strings here; the TUI layer parses them. Core does not
//! know about ratatui.

use log::{Level, debug, log};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub frame_rate: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub background: Option<String>,
    pub empty: Option<String>,
    pub fallback: Option<String>,
    /// Tile value (as a string key, e.g. `"2048"`) to colour.
    #[serde(default)]
    pub tiles: BTreeMap<String, String>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub frame_rate: Option<u32>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_RATE: u32 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "tui-2048.log";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub frame_rate: u32,
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: PathBuf,
    pub theme: ThemeConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tui-2048/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tui-2048").join("config.toml"))
}

/// A loaded config plus the messages produced while finding it.
///
/// Loading runs before the logger is installed, so nothing here is logged
/// directly. The caller replays `messages` once logging is up.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: GameConfig,
    pub messages: Vec<(Level, String)>,
}

impl LoadedConfig {
    fn note(&mut self, level: Level, message: String) {
        self.messages.push((level, message));
    }

    /// Send every collected message to the installed logger.
    pub fn replay(&self) {
        for (level, message) in &self.messages {
            log!(*level, "{}", message);
        }
        debug!("Config: {:?}", self.config);
    }
}

/// Load config from `explicit` if given, else from the default location.
///
/// A missing default file generates a commented-out template and returns
/// `GameConfig::default()`. A missing explicit file is an I/O error. A file
/// that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match config_path() {
        Some(path) => load_or_generate(&path),
        None => {
            let mut loaded = LoadedConfig::default();
            loaded.note(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            Ok(loaded)
        }
    }
}

fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return read_config(path);
    }

    let mut loaded = LoadedConfig::default();
    loaded.note(
        Level::Info,
        format!("No config file found, generating default at {}", path.display()),
    );
    if let Err(message) = generate_default_config(path) {
        loaded.note(Level::Warn, message);
    }
    Ok(loaded)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut loaded = LoadedConfig {
        config: parse_config(&contents)?,
        ..Default::default()
    };
    loaded.note(Level::Info, format!("Loaded config from {}", path.display()));
    Ok(loaded)
}

pub fn parse_config(contents: &str) -> Result<GameConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Result<(), String> {
    let default_content = r##"# tui-2048 Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [general]
# frame_rate = 10                    # Frames per second (also --fps)
# seed = 42                          # Reproducible tile spawns (also --seed)

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "tui-2048.log"              # Relative to the working directory

# [theme]
# background = "#bbada0"
# empty = "#cdc1b4"
# fallback = "#3c3a32"               # Tiles without an entry below

# [theme.tiles]
# "2" = "#eee4da"
# "2048" = "#edc22e"
"##;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {e}"))?;
    }
    fs::write(path, default_content)
        .map_err(|e| format!("Failed to write default config: {e}"))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &GameConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Frame rate: CLI → config → default, never below 1
    let frame_rate = cli
        .frame_rate
        .or(config.general.frame_rate)
        .unwrap_or(DEFAULT_FRAME_RATE)
        .max(1);

    // Seed: CLI → config → OS randomness
    let seed = cli.seed.or(config.general.seed);

    let log_level = config
        .logging
        .level
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        frame_rate,
        seed,
        log_level,
        log_file,
        theme: config.theme.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GameConfig::default();
        assert!(config.general.frame_rate.is_none());
        assert!(config.theme.tiles.is_empty());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&GameConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(resolved.seed, None);
        assert_eq!(resolved.log_level, "info");
        assert_eq!(resolved.log_file, PathBuf::from("tui-2048.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GameConfig {
            general: GeneralConfig {
                frame_rate: Some(30),
                seed: Some(7),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: Some(PathBuf::from("/tmp/game.log")),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.frame_rate, 30);
        assert_eq!(resolved.seed, Some(7));
        assert_eq!(resolved.log_level, "debug");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/game.log"));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = GameConfig {
            general: GeneralConfig {
                frame_rate: Some(30),
                seed: Some(7),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            frame_rate: Some(5),
            seed: Some(8),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.frame_rate, 5);
        assert_eq!(resolved.seed, Some(8));
    }

    #[test]
    fn test_zero_frame_rate_clamps_to_one() {
        let cli = CliOverrides {
            frame_rate: Some(0),
            ..Default::default()
        };
        assert_eq!(resolve(&GameConfig::default(), &cli).frame_rate, 1);
    }

    #[test]
    fn test_toml_with_theme() {
        let toml_str = r##"
[general]
frame_rate = 20
seed = 1234

[logging]
level = "warn"

[theme]
background = "#000000"

[theme.tiles]
"2" = "#ffffff"
"4096" = "red"
"##;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.frame_rate, Some(20));
        assert_eq!(config.general.seed, Some(1234));
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert_eq!(config.theme.background.as_deref(), Some("#000000"));
        assert_eq!(config.theme.tiles.len(), 2);
        assert_eq!(config.theme.tiles["4096"], "red");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let config = parse_config("[general]\nseed = 3\n").unwrap();
        assert_eq!(config.general.seed, Some(3));
        assert!(config.general.frame_rate.is_none());
        assert!(config.logging.level.is_none());
        assert!(config.theme.tiles.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nseed = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/tui-2048/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_template_write_is_reported() {
        // /dev/null is not a directory, so the template can't be created
        let loaded = load_or_generate(Path::new("/dev/null/tui-2048/config.toml")).unwrap();

        assert!(loaded.config.general.frame_rate.is_none());
        let warnings: Vec<_> = loaded
            .messages
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.starts_with("Failed to create config directory"));
    }

    #[test]
    fn test_generated_template_is_read_back() {
        let dir = std::env::temp_dir().join(format!("tui-2048-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let first = load_or_generate(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first.messages.len(), 1);
        assert_eq!(first.messages[0].0, Level::Info);
        assert!(first.messages[0].1.starts_with("No config file found"));

        // Template is fully commented out, so it parses to defaults
        let second = load_or_generate(&path).unwrap();
        assert!(second.config.general.seed.is_none());
        assert!(second.config.theme.tiles.is_empty());
        assert!(second.messages[0].1.starts_with("Loaded config from"));

        let _ = fs::remove_dir_all(&dir);
    }
}
