//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.convo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ThemeMode;
use crate::core::animation::{AnimationSpec, DEFAULT_DURATION_MS, Easing};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConvoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeMode>,
    pub messages_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub duration_ms: Option<u64>,
    pub easing: Option<Easing>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub item_spacing: Option<u16>,
    pub retain_offscreen_state: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ITEM_SPACING: u16 = 1;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub theme: ThemeMode,
    /// `None` means the built-in sample conversation.
    pub messages_file: Option<PathBuf>,
    pub animation: AnimationSpec,
    pub item_spacing: u16,
    pub retain_offscreen_state: bool,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<ThemeMode>,
    pub messages_file: Option<PathBuf>,
}

/// Environment overrides, read once so resolution stays a pure function.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub theme: Option<String>,
    pub messages_file: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            theme: std::env::var("CONVO_THEME").ok(),
            messages_file: std::env::var("CONVO_MESSAGES").ok(),
        }
    }
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

/// Returns the path to `~/.convo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".convo").join("config.toml"))
}

/// Load config from `~/.convo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ConvoConfig::default()`.
pub fn load_config() -> Result<ConvoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ConvoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ConvoConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<ConvoConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ConvoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Convo Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light" (or CONVO_THEME)
# messages_file = "messages.json"    # JSON array of {author, body} (or CONVO_MESSAGES)

# [animation]
# duration_ms = 300                  # 0 disables transitions
# easing = "ease_in_out"             # "ease_in_out" or "linear"

# [list]
# item_spacing = 1                   # blank rows between messages
# retain_offscreen_state = false     # keep expanded rows expanded after scrolling away
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ConvoConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env.theme.as_deref().and_then(parse_theme))
        .or(config.general.theme)
        .unwrap_or_default();

    // Messages file: CLI → env → config → sample data
    let messages_file = cli
        .messages_file
        .clone()
        .or_else(|| env.messages_file.as_ref().map(PathBuf::from))
        .or_else(|| config.general.messages_file.as_ref().map(PathBuf::from));

    let animation = AnimationSpec {
        duration: Duration::from_millis(
            config.animation.duration_ms.unwrap_or(DEFAULT_DURATION_MS),
        ),
        easing: config.animation.easing.unwrap_or_default(),
    };

    ResolvedConfig {
        theme,
        messages_file,
        animation,
        item_spacing: config.list.item_spacing.unwrap_or(DEFAULT_ITEM_SPACING),
        retain_offscreen_state: config.list.retain_offscreen_state.unwrap_or(false),
    }
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    use clap::ValueEnum;

    match ThemeMode::from_str(value.trim(), true) {
        Ok(mode) => Some(mode),
        Err(_) => {
            warn!("Ignoring unknown CONVO_THEME value: {}", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(
            &ConvoConfig::default(),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        );
        assert_eq!(resolved.theme, ThemeMode::Dark);
        assert_eq!(resolved.messages_file, None);
        assert_eq!(resolved.animation, AnimationSpec::default());
        assert_eq!(resolved.item_spacing, DEFAULT_ITEM_SPACING);
        assert!(!resolved.retain_offscreen_state);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ConvoConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Light),
                messages_file: Some("chat.json".to_string()),
            },
            animation: AnimationConfig {
                duration_ms: Some(0),
                easing: Some(Easing::Linear),
            },
            list: ListConfig {
                item_spacing: Some(0),
                retain_offscreen_state: Some(true),
            },
        };
        let resolved = resolve(&config, &EnvOverrides::default(), &CliOverrides::default());
        assert_eq!(resolved.theme, ThemeMode::Light);
        assert_eq!(resolved.messages_file, Some(PathBuf::from("chat.json")));
        assert_eq!(resolved.animation.duration, Duration::ZERO);
        assert_eq!(resolved.animation.easing, Easing::Linear);
        assert_eq!(resolved.item_spacing, 0);
        assert!(resolved.retain_offscreen_state);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let config = ConvoConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Dark),
                messages_file: Some("file.json".to_string()),
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            theme: Some("Light".to_string()),
            messages_file: Some("env.json".to_string()),
        };
        let resolved = resolve(&config, &env, &CliOverrides::default());
        assert_eq!(resolved.theme, ThemeMode::Light);
        assert_eq!(resolved.messages_file, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn test_unknown_env_theme_falls_through_to_config() {
        let config = ConvoConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            theme: Some("sepia".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &env, &CliOverrides::default());
        assert_eq!(resolved.theme, ThemeMode::Light);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let env = EnvOverrides {
            theme: Some("light".to_string()),
            messages_file: Some("env.json".to_string()),
        };
        let cli = CliOverrides {
            theme: Some(ThemeMode::Dark),
            messages_file: Some(PathBuf::from("cli.json")),
        };
        let resolved = resolve(&ConvoConfig::default(), &env, &cli);
        assert_eq!(resolved.theme, ThemeMode::Dark);
        assert_eq!(resolved.messages_file, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
theme = "light"
messages_file = "chat.json"

[animation]
duration_ms = 120
easing = "linear"

[list]
item_spacing = 2
retain_offscreen_state = true
"#;
        let config: ConvoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeMode::Light));
        assert_eq!(config.general.messages_file.as_deref(), Some("chat.json"));
        assert_eq!(config.animation.duration_ms, Some(120));
        assert_eq!(config.animation.easing, Some(Easing::Linear));
        assert_eq!(config.list.item_spacing, Some(2));
        assert_eq!(config.list.retain_offscreen_state, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[animation]
easing = "ease_in_out"
"#;
        let config: ConvoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.easing, Some(Easing::EaseInOut));
        assert!(config.animation.duration_ms.is_none());
        assert!(config.general.theme.is_none());
        assert!(config.list.item_spacing.is_none());
    }

    #[test]
    fn test_bad_theme_in_toml_is_parse_error() {
        let err = toml::from_str::<ConvoConfig>("[general]\ntheme = \"sepia\"\n").unwrap_err();
        let err = ConfigError::Parse(err);
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_load_config_from_missing_path_is_io_error() {
        let err = load_config_from(Path::new("/no/such/convo/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
