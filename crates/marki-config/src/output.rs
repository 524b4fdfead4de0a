//! Output file configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where and how converted files are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// File extension for converted documents, without the dot.
    /// Default: "html"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File stem used when converting inline text into a directory.
    /// Default: "inline"
    #[serde(default = "default_inline_name")]
    pub inline_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            inline_name: default_inline_name(),
        }
    }
}

impl OutputConfig {
    /// Output path for an input file: the input's stem in `dir`.
    pub fn path_for_input(&self, dir: &Path, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.inline_name.clone());
        dir.join(format!("{}.{}", stem, self.extension))
    }

    /// Output path for inline text.
    pub fn path_for_inline(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.inline_name, self.extension))
    }
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_inline_name() -> String {
    "inline".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let output = OutputConfig::default();
        assert_eq!(output.extension, "html");
        assert_eq!(output.inline_name, "inline");
    }

    #[test]
    fn test_path_for_input() {
        let output = OutputConfig::default();
        assert_eq!(
            output.path_for_input(Path::new("out"), Path::new("docs/readme.md")),
            PathBuf::from("out/readme.html")
        );
    }

    #[test]
    fn test_path_for_dotted_input() {
        let output = OutputConfig::default();
        assert_eq!(
            output.path_for_input(Path::new("out"), Path::new("notes.v2.md")),
            PathBuf::from("out/notes.v2.html")
        );
    }

    #[test]
    fn test_path_for_inline() {
        let output = OutputConfig {
            extension: "htm".to_string(),
            inline_name: "snippet".to_string(),
        };
        assert_eq!(
            output.path_for_inline(Path::new("out")),
            PathBuf::from("out/snippet.htm")
        );
    }
}
