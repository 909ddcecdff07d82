//! Command-line interface for clicktoe.

use clap::Parser;
use std::path::PathBuf;

/// Clicktoe - two-player tic-tac-toe in a window
#[derive(Parser, Debug)]
#[command(name = "clicktoe")]
#[command(about = "Two-player tic-tac-toe, played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the display configuration file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "clicktoe.toml")]
    pub config: PathBuf,

    /// TrueType font for marks and heading (overrides the config file)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["clicktoe"]);
        assert_eq!(cli.config, PathBuf::from("clicktoe.toml"));
        assert!(cli.font.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "clicktoe",
            "-c",
            "custom.toml",
            "--font",
            "font.ttf",
            "--log-file",
            "clicktoe.log",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.font, Some(PathBuf::from("font.ttf")));
        assert_eq!(cli.log_file, Some(PathBuf::from("clicktoe.log")));
    }
}
