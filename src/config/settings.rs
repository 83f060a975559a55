// Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::content::ROLES;
use crate::engine::typewriter::TypewriterTimings;

const CONFIG_FILE: &str = "config.ron";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub showcase: ShowcaseConfig,
    pub typewriter: TypewriterConfig,
    pub scene: SceneConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    pub title: String,
}

/// Which interactive widget sits beside the page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum WidgetKind {
    /// Tumbling cube, one topic per pair of opposite faces.
    #[default]
    Cube,
    /// Three planets on elliptical orbits.
    Orbit,
}

impl WidgetKind {
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Cube => "cube",
            WidgetKind::Orbit => "orbit",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub widget: WidgetKind,
    /// Cube spin in radians per second around X, Y and Z.
    pub spin_rates: [f32; 3],
    /// Orbit base angle speed in radians per second.
    pub orbit_speed: f32,
    /// Gap between the two coding profile links.
    pub navigation_delay_ms: u64,
}

impl ShowcaseConfig {
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub speed_ms: u64,
    pub delete_speed_ms: u64,
    pub pause_ms: u64,
    pub blink_ms: u64,
}

impl TypewriterConfig {
    pub fn timings(&self) -> TypewriterTimings {
        TypewriterTimings {
            speed: Duration::from_millis(self.speed_ms),
            delete_speed: Duration::from_millis(self.delete_speed_ms),
            pause: Duration::from_millis(self.pause_ms),
            blink: Duration::from_millis(self.blink_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Background stars behind the widget.
    pub star_count: usize,
    pub star_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the F3 stats overlay at startup.
    pub show_stats: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            title: "Ranga Bharath Kumar | Portfolio".to_string(),
        }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            widget: WidgetKind::Cube,
            spin_rates: [0.2, 0.3, 0.0],
            orbit_speed: std::f32::consts::FRAC_PI_8,
            navigation_delay_ms: 500,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let timings = TypewriterTimings::default();
        Self {
            words: ROLES.iter().map(|w| w.to_string()).collect(),
            speed_ms: timings.speed.as_millis() as u64,
            delete_speed_ms: timings.delete_speed.as_millis() as u64,
            pause_ms: timings.pause.as_millis() as u64,
            blink_ms: timings.blink.as_millis() as u64,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 120,
            star_seed: 7,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_stats: false,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

/// Where a loaded config came from. Reported by the caller once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    Created(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Loaded(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigSource::Created(path) => write!(f, "Created default config at {}", path.display()),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::open(config_dir).map(|(config, _)| config)
    }

    /// Like `load_or_create`, also reporting whether the file already existed.
    /// Runs before the logger is initialised, so it logs nothing itself.
    pub fn open(config_dir: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            Ok((config, ConfigSource::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigSource::Created(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("widget: Cube"));
        assert!(ron_str.contains("navigation_delay_ms: 500"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.showcase.widget = WidgetKind::Orbit;
        config.typewriter.words = vec!["Rustacean".to_string()];
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = ron::from_str("(showcase: (widget: Orbit))").unwrap();
        assert_eq!(config.showcase.widget, WidgetKind::Orbit);
        assert_eq!(config.showcase.navigation_delay_ms, 500);
        assert_eq!(config.typewriter, TypewriterConfig::default());
        assert_eq!(config.scene.star_count, 120);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_typewriter_matches_engine() {
        let config = TypewriterConfig::default();
        assert_eq!(config.timings(), TypewriterTimings::default());
        assert_eq!(config.words, vec!["Cybersecurity Student", "Java Developer"]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.showcase.spin_rates = [0.0, 1.0, 0.5];
        config.debug.show_stats = true;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("portfolio-cube");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_open_reports_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let (_, first) = Config::open(dir.path()).unwrap();
        assert_eq!(first, ConfigSource::Created(path.clone()));
        assert!(first.to_string().starts_with("Created default config at"));

        let (_, second) = Config::open(dir.path()).unwrap();
        assert_eq!(second, ConfigSource::Loaded(path));
        assert!(second.to_string().starts_with("Loaded config from"));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// portfolio settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
