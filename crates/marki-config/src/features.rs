//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds the
//! switches that change how markdown lines are interpreted.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Remove every `-` from unordered list items, hyphens in the text
    /// included. Turning this off strips only the leading marker.
    /// Default: true
    #[serde(default = "default_true")]
    pub strip_inner_dashes: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            strip_inner_dashes: true,
        }
    }
}

fn default_true() -> bool {
    true
}
