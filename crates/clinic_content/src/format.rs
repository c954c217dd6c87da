/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Display formatting: animated counters, phone links and video embeds.

use clinic_core::config::DEFAULT_COUNTER_SEPARATOR;
use url::Url;

/// The integer formed by every ASCII digit in `display`, in order.
///
/// `"70 000+"` is `70000`; text without digits is `0`. Values beyond
/// `u64::MAX` saturate.
pub fn extract_numeric_value(display: &str) -> u64 {
    display
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Render a counter frame: `current` with thousands grouping, followed by
/// whatever `original` has after its last digit (`+`, `%`, ...).
///
/// A zero counter has not started animating and shows `original` as authored.
pub fn format_counter_value(current: u64, original: &str) -> String {
    format_counter_value_with(current, original, DEFAULT_COUNTER_SEPARATOR)
}

/// [`format_counter_value`] with an explicit thousands separator.
pub fn format_counter_value_with(current: u64, original: &str, separator: &str) -> String {
    if current == 0 {
        return original.to_string();
    }
    format!("{}{}", group_thousands(current, separator), counter_suffix(original))
}

/// Text following the last ASCII digit, or `""` when there are no digits.
pub fn counter_suffix(display: &str) -> &str {
    display
        .rfind(|c: char| c.is_ascii_digit())
        .map(|i| &display[i + 1..])
        .unwrap_or("")
}

pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Normalize a phone number for a `tel:` link: trimmed, `+`-prefixed and
/// without whitespace. Digit order is never changed.
///
/// Blank input yields the empty string instead of a bare `+`, so callers can
/// tell "no number" apart from a number and skip the link.
pub fn normalize_phone_for_tel(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.starts_with('+') {
        compact
    } else {
        format!("+{}", compact)
    }
}

/// A `tel:` URI for a phone number, or `None` for blank input.
pub fn tel_href(raw: &str) -> Option<String> {
    let number = normalize_phone_for_tel(raw);
    if number.is_empty() {
        None
    } else {
        Some(format!("tel:{}", number))
    }
}

/// The embeddable player URL for a YouTube link.
///
/// Understands `youtube.com/watch?v=`, `/shorts/`, `/embed/`, `/live/` and
/// `youtu.be/` links; anything else is `None`.
pub fn video_embed_url(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let id = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("shorts" | "embed" | "live") => segments.next().map(str::to_string),
                _ => None,
            }
        }
        _ => None,
    }?;

    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| format!("https://www.youtube.com/embed/{}", id))
}
