/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-suffix text values and the fallback order used to read them.

use crate::lang::ApiSuffix;
use serde::{Deserialize, Serialize};

/// Suffixes probed after the requested one, in priority order.
pub const FALLBACK_ORDER: [ApiSuffix; 7] = [
    ApiSuffix::Uz,
    ApiSuffix::Ru,
    ApiSuffix::En,
    ApiSuffix::Kr,
    ApiSuffix::Tj,
    ApiSuffix::Kz,
    ApiSuffix::Kg,
];

/// One logical field stored once per content language.
///
/// The API delivers `title_uz`, `title_kr`, ... as separate attributes; a
/// `Localized` holds all seven, each of which may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kg: Option<String>,
}

impl Localized {
    /// The stored value for one suffix, if any.
    pub fn get(&self, suffix: ApiSuffix) -> Option<&str> {
        self.slot(suffix).as_deref()
    }

    pub fn set(&mut self, suffix: ApiSuffix, value: impl Into<String>) {
        *self.slot_mut(suffix) = Some(value.into());
    }

    /// True when no suffix carries visible text.
    pub fn is_blank(&self) -> bool {
        ApiSuffix::ALL
            .iter()
            .all(|s| self.get(*s).map_or(true, |v| v.trim().is_empty()))
    }

    /// Iterate over the suffixes that have a stored value, in `ApiSuffix::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (ApiSuffix, &str)> + '_ {
        ApiSuffix::ALL
            .iter()
            .filter_map(move |s| self.get(*s).map(|v| (*s, v)))
    }

    fn slot(&self, suffix: ApiSuffix) -> &Option<String> {
        match suffix {
            ApiSuffix::Uz => &self.uz,
            ApiSuffix::Kr => &self.kr,
            ApiSuffix::Ru => &self.ru,
            ApiSuffix::En => &self.en,
            ApiSuffix::Tj => &self.tj,
            ApiSuffix::Kz => &self.kz,
            ApiSuffix::Kg => &self.kg,
        }
    }

    fn slot_mut(&mut self, suffix: ApiSuffix) -> &mut Option<String> {
        match suffix {
            ApiSuffix::Uz => &mut self.uz,
            ApiSuffix::Kr => &mut self.kr,
            ApiSuffix::Ru => &mut self.ru,
            ApiSuffix::En => &mut self.en,
            ApiSuffix::Tj => &mut self.tj,
            ApiSuffix::Kz => &mut self.kz,
            ApiSuffix::Kg => &mut self.kg,
        }
    }
}

/// Ordered suffixes to probe for a field: the requested suffix first, then
/// [`FALLBACK_ORDER`] without repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChain {
    order: [ApiSuffix; 7],
}

impl FallbackChain {
    pub fn for_suffix(primary: ApiSuffix) -> Self {
        let mut order = [primary; 7];
        let mut next = 1;
        for suffix in FALLBACK_ORDER {
            if suffix != primary {
                order[next] = suffix;
                next += 1;
            }
        }
        Self { order }
    }

    /// The authoritative suffix.
    pub fn primary(&self) -> ApiSuffix {
        self.order[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = ApiSuffix> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[ApiSuffix] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_starts_with_primary_and_never_repeats() {
        for suffix in ApiSuffix::ALL {
            let chain = FallbackChain::for_suffix(*suffix);
            assert_eq!(chain.primary(), *suffix);
            let mut sorted = chain.as_slice().to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 7, "chain for {suffix} repeats a suffix");
        }
    }

    #[test]
    fn test_chain_order() {
        let chain = FallbackChain::for_suffix(ApiSuffix::En);
        assert_eq!(
            chain.as_slice(),
            &[
                ApiSuffix::En,
                ApiSuffix::Uz,
                ApiSuffix::Ru,
                ApiSuffix::Kr,
                ApiSuffix::Tj,
                ApiSuffix::Kz,
                ApiSuffix::Kg
            ]
        );

        let chain = FallbackChain::for_suffix(ApiSuffix::Uz);
        assert_eq!(&chain.as_slice()[..3], &[ApiSuffix::Uz, ApiSuffix::Ru, ApiSuffix::En]);
    }

    #[test]
    fn test_blank_detection() {
        assert!(Localized::default().is_blank());
        assert!(crate::localized!(uz = "  ", ru = "").is_blank());
        assert!(!crate::localized!(kg = "Башкы").is_blank());
    }

    #[test]
    fn test_set_and_get() {
        let mut value = Localized::default();
        value.set(ApiSuffix::Tj, "Асосӣ");
        assert_eq!(value.get(ApiSuffix::Tj), Some("Асосӣ"));
        assert_eq!(value.iter().count(), 1);
    }
}
