use canvas::DEFAULT_CANVAS_HEIGHT;
use clap::Parser;
use log::LevelFilter;
use theme::Appearance;

/// Easel - drag elements onto a canvas and arrange them
#[derive(Debug, Parser)]
#[command(name = "easel")]
#[command(about = "Drag-and-drop canvas editor")]
pub struct Config {
    /// Color theme (light or dark)
    #[arg(long, default_value_t = Appearance::Light)]
    pub theme: Appearance,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["easel"]).unwrap();
        assert_eq!(config.theme, Appearance::Light);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(!config.no_log_file);
        assert_eq!(config.canvas_height, 400.0);
    }

    #[test]
    fn all_flags() {
        let config = Config::try_parse_from([
            "easel",
            "--theme",
            "dark",
            "--log-level",
            "debug",
            "--no-log-file",
            "--canvas-height",
            "600",
        ])
        .unwrap();
        assert_eq!(config.theme, Appearance::Dark);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.no_log_file);
        assert_eq!(config.canvas_height, 600.0);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::try_parse_from(["easel", "--theme", "sepia"]).is_err());
    }
}
