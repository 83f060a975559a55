// Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use super::settings::{Config, WidgetKind};

/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "portfolio-cube", about = "Interactive portfolio with a rotating topic cube")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Interactive widget beside the page.
    #[arg(long, value_enum)]
    pub widget: Option<WidgetKind>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show the stats overlay at startup.
    #[arg(long)]
    pub stats: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(widget) = args.widget {
            self.showcase.widget = widget;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.stats {
            self.debug.show_stats = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            widget: Some(WidgetKind::Orbit),
            stats: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.showcase.widget, WidgetKind::Orbit);
        assert!(config.debug.show_stats);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "portfolio-cube",
            "--widget",
            "orbit",
            "--log-level",
            "debug",
            "--config",
            "/tmp/pc",
        ])
        .unwrap();
        assert_eq!(args.widget, Some(WidgetKind::Orbit));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pc")));
        assert!(!args.stats);
    }
}
