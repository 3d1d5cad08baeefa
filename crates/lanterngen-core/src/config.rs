//! Configuration management for Lantern binding generation.
//!
//! This module defines the `Config` struct holding the naming prefix, the
//! three marker pairs that locate generated regions, and the policy applied
//! when an end marker is missing. Every field has a default matching the
//! stock `lantern.cpp` / `lantern.h` layout, so a config file only needs to
//! list what it changes.
//!
//! # Examples
//!
//! ```no_run
//! use lanterngen_core::config::Config;
//! use lanterngen_core::rewrite::EndMarkerPolicy;
//!
//! // Create a config programmatically
//! let mut config = Config::default();
//! config.end_marker_policy = EndMarkerPolicy::Strict;
//!
//! // Or load from a config file
//! # async fn load() -> lanterngen_core::Result<()> {
//! let config = Config::from_file("lanterngen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::rewrite::{EndMarkerPolicy, MarkerPair};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for Lantern binding generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix prepended to every lower-cased function name
    #[serde(default = "default_function_prefix")]
    pub function_prefix: String,

    /// Markers around the stub bodies in the source file
    #[serde(default = "MarkerPair::body")]
    pub body_markers: MarkerPair,

    /// Markers around the function-pointer declarations in the header
    #[serde(default = "MarkerPair::headers")]
    pub header_markers: MarkerPair,

    /// Markers around the symbol loaders in the header
    #[serde(default = "MarkerPair::symbols")]
    pub symbol_markers: MarkerPair,

    /// What to do when a start marker has no end marker after it
    #[serde(default)]
    pub end_marker_policy: EndMarkerPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_prefix: default_function_prefix(),
            body_markers: MarkerPair::body(),
            header_markers: MarkerPair::headers(),
            symbol_markers: MarkerPair::symbols(),
            end_marker_policy: EndMarkerPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file (JSON when the extension says so, YAML otherwise)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            crate::Error::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

fn default_function_prefix() -> String {
    "lantern_".to_string()
}
