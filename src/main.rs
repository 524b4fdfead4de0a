//! Marki - a markdown to HTML generator.
//!
//! This binary provides the CLI interface to the marki library: inline text
//! or an input file in, HTML on stdout or in an output directory.

mod cli;

use clap::{CommandFactory, Parser as ClapParser};
use cli::{Cli, Job};
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use marki::{try_convert_to_file_with, try_convert_with, MarkiError, Result};
use marki_config::Config;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Marki v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        if matches!(e, MarkiError::Parameter(_)) {
            let _ = Cli::command().print_help();
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let job = cli.job()?;
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    match job {
        Job::InlineToStdout(markdown) => run_stdout(&markdown, &config),
        Job::InlineToDir { markdown, dir } => {
            let path = config.output.path_for_inline(&dir);
            write_into(&dir, &path, markdown.as_bytes(), &config)
        }
        Job::FileToDir { input, dir } => {
            info!("Processing file: {}", input.display());
            let file = File::open(&input)?;
            let path = config.output.path_for_input(&dir, &input);
            write_into(&dir, &path, file, &config)
        }
    }
}

/// Load configuration with an optional override.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    if cli.config.is_some() {
        debug!("Merged config override");
    }
    Ok(config)
}

/// Convert inline markdown and print the HTML.
fn run_stdout(markdown: &str, config: &Config) -> Result<()> {
    let html = try_convert_with(markdown.as_bytes(), &config.features)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    if !html.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Convert into a new file inside `dir`, creating the directory if needed.
fn write_into<R: io::Read>(dir: &Path, path: &Path, markdown: R, config: &Config) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    try_convert_to_file_with(markdown, path, &config.features)?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_inline_override() {
        let cli = Cli::parse_from([
            "marki",
            "-i",
            "x",
            "-c",
            "[features]\nStripInnerDashes = false",
        ]);
        let config = load_config(&cli).unwrap();
        assert!(!config.features.strip_inner_dashes);
    }

    #[test]
    fn test_load_config_file_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[output]\nExtension = \"htm\"").unwrap();

        let cli = Cli::parse_from(["marki", "-i", "x", "-c", path.to_str().unwrap()]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.output.extension, "htm");
        assert!(config.features.strip_inner_dashes);
    }

    #[test]
    fn test_load_config_bad_override() {
        let cli = Cli::parse_from(["marki", "-i", "x", "-c", "[features"]);
        assert!(matches!(load_config(&cli), Err(MarkiError::Config(_))));
    }

    #[test]
    fn test_write_into_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("site");
        let config = Config::default();
        let path = config.output.path_for_inline(&dir);
        write_into(&dir, &path, "# Hi".as_bytes(), &config).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<h1>Hi</h1>");
    }
}
