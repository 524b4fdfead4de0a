//! Command-line interface for Marki.

use clap::Parser;
use std::path::PathBuf;

use marki_core::{MarkiError, Result};

/// Marki - a markdown to HTML generator.
///
/// Converts inline markdown or a markdown file into HTML, one line at a
/// time.
#[derive(Parser, Debug)]
#[command(
    name = "marki",
    author = "Marki Contributors",
    version,
    about = "A markdown to HTML generator",
    after_help = "Examples:\n  \
                  marki -i '# Hello'\n  \
                  marki -f notes.md -o site/\n  \
                  marki -i '- one' -o out/ -c '[output]\\nExtension = \"htm\"'"
)]
pub struct Cli {
    /// Inline markdown to convert
    #[arg(short = 'i', long = "inline", value_name = "TEXT")]
    pub inline: Option<String>,

    /// Markdown input file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output directory where the HTML files are stored
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

/// What the parameters ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Inline markdown printed to stdout
    InlineToStdout(String),
    /// Inline markdown written into a directory
    InlineToDir { markdown: String, dir: PathBuf },
    /// A markdown file written into a directory
    FileToDir { input: PathBuf, dir: PathBuf },
}

impl Cli {
    /// Check the parameter combination and pick the job.
    ///
    /// Inline text wins over an input file; an input file needs an output
    /// directory.
    pub fn job(&self) -> Result<Job> {
        if let Some(ref markdown) = self.inline {
            return Ok(match self.output_dir {
                Some(ref dir) => Job::InlineToDir {
                    markdown: markdown.clone(),
                    dir: dir.clone(),
                },
                None => Job::InlineToStdout(markdown.clone()),
            });
        }

        match (&self.file, &self.output_dir) {
            (Some(input), Some(dir)) => Ok(Job::FileToDir {
                input: input.clone(),
                dir: dir.clone(),
            }),
            (Some(_), None) => Err(MarkiError::Parameter(
                "An input file needs an output directory (-o)".into(),
            )),
            _ => Err(MarkiError::Parameter(
                "Required parameter is missing: -i or -f with -o".into(),
            )),
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use marki_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["marki"]);
        assert!(cli.inline.is_none());
        assert!(cli.file.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.show_paths);
    }

    #[test]
    fn test_inline_to_stdout() {
        let cli = Cli::parse_from(["marki", "-i", "# Hi"]);
        assert_eq!(cli.job().unwrap(), Job::InlineToStdout("# Hi".to_string()));
    }

    #[test]
    fn test_inline_to_dir() {
        let cli = Cli::parse_from(["marki", "-i", "text", "-o", "out"]);
        assert_eq!(
            cli.job().unwrap(),
            Job::InlineToDir {
                markdown: "text".to_string(),
                dir: PathBuf::from("out"),
            }
        );
    }

    #[test]
    fn test_file_to_dir() {
        let cli = Cli::parse_from(["marki", "-f", "a.md", "--output-dir", "site"]);
        assert_eq!(
            cli.job().unwrap(),
            Job::FileToDir {
                input: PathBuf::from("a.md"),
                dir: PathBuf::from("site"),
            }
        );
    }

    #[test]
    fn test_file_without_output_dir() {
        let cli = Cli::parse_from(["marki", "-f", "a.md"]);
        assert!(matches!(cli.job(), Err(MarkiError::Parameter(_))));
    }

    #[test]
    fn test_missing_parameters() {
        let cli = Cli::parse_from(["marki", "-o", "site"]);
        assert!(matches!(cli.job(), Err(MarkiError::Parameter(_))));
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        assert!(Cli::try_parse_from(["marki", "-x", "y"]).is_err());
    }
}
