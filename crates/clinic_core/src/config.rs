/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Site configuration.
//!
//! Everything here is optional; an empty file yields the built-in behavior.
//!
//! ```yaml
//! surfaces:
//!   addresses: cyrillic
//! placeholders:
//!   ru: "Нет данных"
//! counter-separator: " "
//! clean-markup: true
//! ```

use crate::lang::{ApiSuffix, SuffixPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A page section rendering one kind of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    Banners,
    Services,
    Faqs,
    Statistics,
    Addresses,
    Phones,
    WorkTimes,
    SocialVideos,
    Gallery,
    CompanyInfo,
    About,
}

impl Surface {
    /// The suffix policy a surface uses unless configured otherwise.
    ///
    /// Services and FAQs default unknown languages to the Cyrillic Uzbek
    /// content; every other surface defaults to Latin Uzbek.
    pub fn default_policy(self) -> SuffixPolicy {
        match self {
            Surface::Services | Surface::Faqs => SuffixPolicy::Cyrillic,
            _ => SuffixPolicy::Latin,
        }
    }
}

/// Site configuration read from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "clinic.yaml";

/// Default thousands separator for animated counters.
pub const DEFAULT_COUNTER_SEPARATOR: &str = ",";

/// Site-wide rendering options. Unknown keys are rejected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    /// Per-surface overrides of the unknown-language policy.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub surfaces: HashMap<Surface, SuffixPolicy>,
    /// Text shown for a title-like field with no content in any language.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub placeholders: HashMap<ApiSuffix, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_separator: Option<String>,
    /// Whether markup fields go through the cleanup passes (default: true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_markup: Option<bool>,
}

impl SiteConfig {
    /// Load a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse site config YAML: {}", e))
    }

    /// Load a configuration from a file path.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read site config file: {}", e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Load a configuration, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_yaml_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default site config");
                Self::default()
            }
        }
    }

    /// Apply `other` on top of `self`; set values in `other` win.
    pub fn merge(&mut self, other: &SiteConfig) {
        self.surfaces
            .extend(other.surfaces.iter().map(|(k, v)| (*k, *v)));
        self.placeholders
            .extend(other.placeholders.iter().map(|(k, v)| (*k, v.clone())));
        crate::merge_options!(self, other, counter_separator, clean_markup);
    }

    pub fn policy_for(&self, surface: Surface) -> SuffixPolicy {
        self.surfaces
            .get(&surface)
            .copied()
            .unwrap_or_else(|| surface.default_policy())
    }

    /// The configured placeholder for a suffix, or the empty string.
    pub fn placeholder(&self, suffix: ApiSuffix) -> &str {
        self.placeholders.get(&suffix).map(String::as_str).unwrap_or("")
    }

    pub fn counter_separator(&self) -> &str {
        self.counter_separator
            .as_deref()
            .unwrap_or(DEFAULT_COUNTER_SEPARATOR)
    }

    pub fn cleans_markup(&self) -> bool {
        self.clean_markup.unwrap_or(true)
    }
}
