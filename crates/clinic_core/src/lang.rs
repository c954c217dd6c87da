/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Language codes.
//!
//! The interface and the content API name languages differently. The UI uses
//! locale identifiers such as `uz-cyrillic`; the API stores each localizable
//! field once per content-language suffix (`title_uz`, `title_kr`, ...). This
//! module owns the single table translating one into the other.

use serde::{Deserialize, Serialize};
use tracing::debug;

crate::str_enum! {
    /// Content-language suffix used by the content API.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ApiSuffix {
        /// Uzbek, Latin script.
        Uz = "uz",
        /// Uzbek, Cyrillic script.
        Kr = "kr",
        /// Russian.
        Ru = "ru",
        /// English.
        En = "en",
        /// Tajik.
        Tj = "tj",
        /// Kazakh.
        Kz = "kz",
        /// Kyrgyz.
        Kg = "kg",
    }
}

crate::str_enum! {
    /// Interface locale identifier, as reported by the UI's i18n layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum UiLanguage {
        UzCyrillic = "uz-cyrillic",
        UzLatin = "uz-latin",
        Ru = "ru",
        En = "en",
        Kz = "kz",
        Ky = "ky",
        Tg = "tg",
    }
}

impl UiLanguage {
    /// The content suffix this interface language reads.
    pub fn api_suffix(self) -> ApiSuffix {
        match self {
            UiLanguage::UzLatin => ApiSuffix::Uz,
            UiLanguage::UzCyrillic => ApiSuffix::Kr,
            UiLanguage::Ru => ApiSuffix::Ru,
            UiLanguage::En => ApiSuffix::En,
            UiLanguage::Kz => ApiSuffix::Kz,
            UiLanguage::Ky => ApiSuffix::Kg,
            UiLanguage::Tg => ApiSuffix::Tj,
        }
    }
}

/// What an unrecognized UI code falls back to.
///
/// Content surfaces historically disagreed on this default, so each surface
/// names the policy it uses instead of sharing one implicit value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixPolicy {
    /// Unknown codes read the Latin-script Uzbek content (`uz`).
    #[default]
    Latin,
    /// Unknown codes read the Cyrillic-script Uzbek content (`kr`).
    Cyrillic,
}

impl SuffixPolicy {
    pub fn default_suffix(self) -> ApiSuffix {
        match self {
            SuffixPolicy::Latin => ApiSuffix::Uz,
            SuffixPolicy::Cyrillic => ApiSuffix::Kr,
        }
    }
}

/// Map a UI language code to the API suffix to read.
///
/// Total: any string not in the table resolves to the policy default.
pub fn resolve_api_suffix(ui_code: &str, policy: SuffixPolicy) -> ApiSuffix {
    match UiLanguage::parse(ui_code) {
        Some(language) => language.api_suffix(),
        None => {
            let fallback = policy.default_suffix();
            debug!(ui_code, ?policy, suffix = %fallback, "unknown UI language code");
            fallback
        }
    }
}
