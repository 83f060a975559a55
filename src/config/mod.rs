// Runtime configuration
// Settings persist as config.ron in the platform config dir; CLI flags
// override whatever was loaded.

mod cli;
mod error;
mod settings;

pub use cli::CliArgs;
pub use error::ConfigError;
pub use settings::{Config, ConfigSource, ShowcaseConfig, WidgetKind};

/// Default directory for `config.ron`. Falls back to the working directory
/// when the platform has no config dir.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("portfolio-cube"))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
