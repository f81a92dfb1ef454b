//! Typewriter - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use typewriter::model::AppError;

const SAMPLE_TEXT: &str = "\
The lamp on the desk flickered twice and went steady. Somewhere below, a \
door closed, and the house settled back into its usual quiet.

She read the letter again, slower this time, as if the words might \
rearrange themselves into something kinder. They did not.

Press space to skip ahead, or wait for the page to finish. When a page is \
done, press space again to turn it.";

/// Typewriter - reveal text a glyph at a time, one page per screen
#[derive(Parser, Debug)]
#[command(name = "typewriter")]
#[command(version)]
#[command(about = "Reveal a text file typewriter-style in the terminal")]
pub struct Args {
    /// Path to a text file (a built-in sample is shown if not provided)
    pub file: Option<PathBuf>,

    /// Reveal speed in columns per second
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub frame_rate: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = typewriter::config::load_config_with_precedence(args.config.clone())?;
        let merged = typewriter::config::merge_config(config_file);
        let with_env = typewriter::config::apply_env_overrides(merged);
        typewriter::config::apply_cli_overrides(with_env, args.speed, args.frame_rate)
    };

    typewriter::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "cannot read input file");
            err
        })?,
        None => SAMPLE_TEXT.to_string(),
    };

    typewriter::view::run(content, &config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["typewriter", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["typewriter", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["typewriter"]);
        assert_eq!(args.file, None);
        assert_eq!(args.speed, None);
        assert_eq!(args.frame_rate, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["typewriter", "story.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("story.txt")));
    }

    #[test]
    fn test_speed_short_and_long() {
        let args = Args::parse_from(["typewriter", "-s", "25"]);
        assert_eq!(args.speed, Some(25.0));
        let args = Args::parse_from(["typewriter", "--speed", "12.5"]);
        assert_eq!(args.speed, Some(12.5));
    }

    #[test]
    fn test_frame_rate_rejects_zero() {
        let result = Args::try_parse_from(["typewriter", "--frame-rate", "0"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_speed_overrides_config_file() {
        use typewriter::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            speed: Some(15.0),
            frame_rate: Some(30),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.settings.speed, 15.0);

        let with_cli = apply_cli_overrides(merged, Some(60.0), None);
        assert_eq!(with_cli.settings.speed, 60.0);
        assert_eq!(with_cli.frame_rate, 30);
    }

    #[test]
    fn test_sample_text_wraps_into_several_lines() {
        use typewriter::config::TypewriterSettings;
        use typewriter::layout::Typewriter;

        let mut panel = Typewriter::from_settings(&TypewriterSettings::terminal(40.0), 40.0, 5.0);
        panel.text_mut().set_content(SAMPLE_TEXT);
        panel.commit_config();

        assert!(panel.text().lines().len() > 5);
        assert!(panel.has_next_page());
    }
}
