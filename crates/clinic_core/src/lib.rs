/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Content model for the clinic website.
//!
//! The content API stores every translatable attribute once per content
//! language, as `<field>_<suffix>` (`title_uz`, `title_kr`, `title_ru`, ...).
//! This crate provides the typed side of that convention:
//!
//! - [`lang`]: UI language codes, API suffixes and the table between them;
//! - [`localized`]: the per-suffix [`Localized`] value and its fallback order;
//! - [`record`] and [`entity`]: tolerant parsing of API records into typed content;
//! - [`bundle`]: a full snapshot of site content;
//! - [`config`]: site-wide rendering options.

#[macro_use]
pub mod macros;

pub mod bundle;
pub mod config;
pub mod entity;
pub mod lang;
pub mod localized;
pub mod record;

pub use bundle::ContentBundle;
pub use config::{SiteConfig, Surface};
pub use entity::{
    About, Banner, CompanyAddress, CompanyInfo, CompanyPhone, Faq, GalleryImage,
    LocalizableEntity, Service, SocialLink, SocialVideo, Statistic, WorkTime,
};
pub use lang::{resolve_api_suffix, ApiSuffix, SuffixPolicy, UiLanguage};
pub use localized::{FallbackChain, Localized};
pub use record::{RawRecord, RecordId};
