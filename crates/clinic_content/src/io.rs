/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use clinic_core::{ContentBundle, SiteConfig};
use tracing::debug;

use crate::ContentError;

/// Load a content bundle from a file given its path.
/// Supports JSON (`.json`) and YAML (any other extension).
pub fn load_bundle(path: &Path) -> Result<ContentBundle, ContentError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let bundle = match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ContentError::ParseError("JSON".to_string(), e.to_string()))?;

            serde_json::from_slice::<ContentBundle>(&bytes)
                .map_err(|e| ContentError::ParseError("JSON".to_string(), e.to_string()))?
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ContentError::ParseError("YAML".to_string(), e.to_string()))?;

            serde_yaml::from_str::<ContentBundle>(&content)
                .map_err(|e| ContentError::ParseError("YAML".to_string(), e.to_string()))?
        }
    };

    debug!(path = %path.display(), records = ?bundle.counts(), "loaded content bundle");
    Ok(bundle)
}

/// Load a site configuration file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ContentError> {
    let content = fs::read_to_string(path)?;
    SiteConfig::from_yaml_str(&content).map_err(ContentError::Config)
}
