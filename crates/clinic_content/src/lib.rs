/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Clinic content processing
//!
//! This crate turns raw content API records into display-ready values for
//! the active UI language. It resolves localized fields through a fixed
//! fallback chain, repairs upstream markup, and prepares counters, phone
//! links and video embeds.
//!
//! Every operation on content is total: missing or malformed content
//! degrades to empty output, never to an error. Only loading files can fail.
//!
//! # Example
//!
//! ```rust
//! use clinic_content::{ContentResolver, resolve_field};
//! use clinic_core::{ApiSuffix, CompanyPhone, SiteConfig, Statistic};
//!
//! let phone: CompanyPhone = serde_json::from_str(r#"{
//!     "id": 1,
//!     "title_uz": "Qabulxona",
//!     "title_ru": "Регистратура",
//!     "phone": "998 55 514 03 33"
//! }"#).unwrap();
//!
//! assert_eq!(resolve_field(&phone, "title", ApiSuffix::En, ""), "Qabulxona");
//!
//! let config = SiteConfig::default();
//! let resolver = ContentResolver::new(&config, "ru");
//! let view = resolver.phone(&phone);
//! assert_eq!(view.title, "Регистратура");
//! assert_eq!(view.tel.as_deref(), Some("tel:+998555140333"));
//!
//! let stat: Statistic = serde_json::from_str(r#"{"count": "15 000+"}"#).unwrap();
//! let view = resolver.statistic(&stat);
//! assert_eq!(clinic_content::format_counter_value(view.target, &view.display), "15,000+");
//! ```

pub mod error;
pub mod fetch;
pub mod format;
pub mod io;
pub mod markup;
pub mod resolve;
pub mod view;

pub use error::ContentError;
pub use fetch::FetchState;
pub use format::{
    extract_numeric_value, format_counter_value, format_counter_value_with,
    normalize_phone_for_tel, tel_href, video_embed_url,
};
pub use markup::{clean_markup, plain_text, MarkupCleaner};
pub use resolve::{resolve_field, resolve_text, try_resolve};
pub use view::{BundleView, ContentResolver};

// Re-export the language table from clinic_core for convenience
pub use clinic_core::lang::{resolve_api_suffix, ApiSuffix, SuffixPolicy};
