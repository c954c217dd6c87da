/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field resolution across content languages.
//!
//! A field resolves to the first value along its [`FallbackChain`] that has
//! visible text: the requested suffix, then `uz`, `ru`, `en`, then the
//! remaining suffixes. Missing content is never an error; it resolves to the
//! caller's default.

use clinic_core::{ApiSuffix, FallbackChain, LocalizableEntity, Localized};
use tracing::trace;

/// The first non-blank value for `suffix`, or `None` when every language is blank.
///
/// The returned text is the stored value unchanged; blankness is judged on
/// the trimmed value.
pub fn try_resolve(localized: &Localized, suffix: ApiSuffix) -> Option<&str> {
    let chain = FallbackChain::for_suffix(suffix);
    let (found, value) = chain.iter().find_map(|candidate| {
        localized
            .get(candidate)
            .filter(|v| !v.trim().is_empty())
            .map(|v| (candidate, v))
    })?;
    if found != suffix {
        trace!(requested = %suffix, used = %found, "localized value fell back");
    }
    Some(value)
}

/// Resolve one [`Localized`] value, using `default` when nothing is found.
pub fn resolve_text(localized: &Localized, suffix: ApiSuffix, default: &str) -> String {
    try_resolve(localized, suffix).unwrap_or(default).to_string()
}

/// Resolve the logical field `field` of an entity.
///
/// Unknown field names behave like fields with no content. Pass `""` as
/// `default` for the usual blank rendering.
///
/// ```
/// use clinic_core::{localized, ApiSuffix, Banner};
/// use clinic_content::resolve_field;
///
/// let banner = Banner {
///     title: localized!(kr = "", uz = "Асосий", ru = "Главный"),
///     ..Default::default()
/// };
/// assert_eq!(resolve_field(&banner, "title", ApiSuffix::En, ""), "Асосий");
/// assert_eq!(resolve_field(&banner, "subtitle", ApiSuffix::En, "n/a"), "n/a");
/// ```
pub fn resolve_field<E>(entity: &E, field: &str, suffix: ApiSuffix, default: &str) -> String
where
    E: LocalizableEntity + ?Sized,
{
    entity
        .localized_field(field)
        .and_then(|localized| try_resolve(localized, suffix))
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::localized;

    #[test]
    fn test_primary_suffix_wins() {
        let value = localized!(uz = "Xizmatlar", ru = "Услуги", tj = "Хизматрасонӣ");
        assert_eq!(try_resolve(&value, ApiSuffix::Tj), Some("Хизматрасонӣ"));
        assert_eq!(try_resolve(&value, ApiSuffix::Ru), Some("Услуги"));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let value = localized!(en = "  \n\t", ru = "Услуги");
        assert_eq!(try_resolve(&value, ApiSuffix::En), Some("Услуги"));
    }

    #[test]
    fn test_value_is_returned_untrimmed() {
        let value = localized!(en = " Services ");
        assert_eq!(try_resolve(&value, ApiSuffix::En), Some(" Services "));
    }

    #[test]
    fn test_remaining_suffixes_are_probed_last() {
        let value = localized!(kg = "Кызматтар", kz = "Қызметтер");
        // kz comes before kg in the tail of the chain.
        assert_eq!(try_resolve(&value, ApiSuffix::Uz), Some("Қызметтер"));
        assert_eq!(try_resolve(&value, ApiSuffix::Kg), Some("Кызматтар"));
    }

    #[test]
    fn test_all_blank_uses_default() {
        let value = localized!(uz = "", ru = " ");
        assert_eq!(try_resolve(&value, ApiSuffix::Uz), None);
        assert_eq!(resolve_text(&value, ApiSuffix::Uz, ""), "");
        assert_eq!(resolve_text(&value, ApiSuffix::Uz, "Нет данных"), "Нет данных");
    }
}
