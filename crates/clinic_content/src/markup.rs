/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Structural cleanup of markup coming from the content API.
//!
//! Upstream rich text has two recurring defects: editor-generated `data-*`
//! attributes, and tag names that went through a Latin-to-Cyrillic
//! transliteration together with the text (`<п>`, `<стронг>`, `<бр>`).
//! [`clean_markup`] repairs both and normalizes whitespace and line breaks.
//!
//! The output is *not* safe for direct DOM insertion; it still has to go
//! through an HTML sanitizer.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Tag names recognized when repairing transliterated tags.
const KNOWN_TAGS: &[&str] = &[
    "p", "br", "b", "strong", "em", "i", "u", "ul", "ol", "li", "span", "div", "a", "h1", "h2",
    "h3", "h4", "h5", "h6",
];

/// Cyrillic letters and the Latin letters they stand in for, either by
/// transliteration (`п` for `p`) or by shape (`р` for `p`).
const CYRILLIC_STAND_INS: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "vb"),
    ('д', "d"),
    ('е', "e"),
    ('э', "e"),
    ('г', "g"),
    ('ҳ', "h"),
    ('х', "hx"),
    ('н', "nh"),
    ('и', "i"),
    ('і', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('о', "o"),
    ('п', "pn"),
    ('р', "rp"),
    ('с', "sc"),
    ('ѕ', "s"),
    ('т', "t"),
    ('у', "uy"),
];

static CLEANER: LazyLock<MarkupCleaner> = LazyLock::new(MarkupCleaner::default);

/// Clean upstream markup. See [`MarkupCleaner::clean`].
pub fn clean_markup(raw: &str) -> String {
    CLEANER.clean(raw)
}

/// Reduce markup to display text. See [`MarkupCleaner::plain_text`].
pub fn plain_text(markup: &str) -> String {
    CLEANER.plain_text(markup)
}

/// Compiled patterns for the cleanup passes.
pub struct MarkupCleaner {
    tag: Regex,
    data_attribute: Regex,
    tag_name: Regex,
    spaces: Regex,
    line_break: Regex,
    separating_tag: Regex,
    any_whitespace: Regex,
}

impl Default for MarkupCleaner {
    fn default() -> Self {
        Self {
            // Quoted attribute values may contain `<` or `>`.
            tag: Regex::new(r#"<(?:[^<>"']|"[^"]*"|'[^']*')*>"#).unwrap(),
            data_attribute: Regex::new(r#"\s+data-[\w.:-]*\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap(),
            tag_name: Regex::new(r"<(/?)([^\s/<>]+)([\s/>])").unwrap(),
            // Whitespace other than CR/LF; line breaks belong to the next pass.
            spaces: Regex::new(r"[^\S\r\n]+").unwrap(),
            line_break: Regex::new(r"\r\n|\r|\n").unwrap(),
            separating_tag: Regex::new(r"(?i)<br\s*/?>|</(?:p|div|li|h[1-6])\s*>").unwrap(),
            any_whitespace: Regex::new(r"\s+").unwrap(),
        }
    }
}

impl MarkupCleaner {
    /// Apply the cleanup passes, in order:
    ///
    /// 1. strip `data-*` attributes from tags;
    /// 2. rewrite transliterated tag names back to Latin;
    /// 3. collapse whitespace runs to one space;
    /// 4. turn CRLF, LF and CR into `<br>`;
    /// 5. trim.
    ///
    /// The sequence is repeated until the text stops changing, so cleaning
    /// cleaned text is a no-op. Unrecognized markup is left alone.
    pub fn clean(&self, raw: &str) -> String {
        let mut current = self.pass(raw);
        loop {
            let next = self.pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn pass(&self, input: &str) -> String {
        let text = self.strip_data_attributes(input);
        let text = self.repair_tag_names(&text);
        let text = self.spaces.replace_all(&text, " ");
        let text = self.line_break.replace_all(&text, "<br>");
        text.trim().to_string()
    }

    fn strip_data_attributes(&self, input: &str) -> String {
        self.tag
            .replace_all(input, |caps: &Captures| {
                self.data_attribute.replace_all(&caps[0], "").into_owned()
            })
            .into_owned()
    }

    fn repair_tag_names(&self, input: &str) -> String {
        self.tag_name
            .replace_all(input, |caps: &Captures| {
                let name = &caps[2];
                match latin_tag_name(name) {
                    Some(latin) => format!("<{}{}{}", &caps[1], latin, &caps[3]),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Strip all tags, keeping a space where a line break or block ended,
    /// decode the basic entities and collapse whitespace.
    pub fn plain_text(&self, markup: &str) -> String {
        let cleaned = self.clean(markup);
        let text = self.separating_tag.replace_all(&cleaned, " ");
        let text = self.tag.replace_all(&text, "");
        let text = decode_entities(&text);
        self.any_whitespace
            .replace_all(&text, " ")
            .trim()
            .to_string()
    }
}

/// The Latin tag a transliterated name stands for.
///
/// Pure-ASCII names are never rewritten.
fn latin_tag_name(name: &str) -> Option<&'static str> {
    if name.is_ascii() {
        return None;
    }
    let lowered = name.to_lowercase();
    KNOWN_TAGS
        .iter()
        .copied()
        .find(|tag| stands_for(&lowered, tag))
}

fn stands_for(name: &str, tag: &str) -> bool {
    name.chars().count() == tag.len()
        && name.chars().zip(tag.chars()).all(|(c, latin)| {
            if c.is_ascii() {
                c == latin
            } else {
                CYRILLIC_STAND_INS
                    .iter()
                    .any(|(cyr, options)| *cyr == c && options.contains(latin))
            }
        })
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
