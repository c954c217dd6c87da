/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use clinic_core::{Banner, ContentBundle, Localized, Service};
use std::path::PathBuf;

// --- Helper Functions for Test Data Construction ---

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load the full JSON fixture bundle.
pub fn sample_bundle() -> ContentBundle {
    clinic_content::io::load_bundle(&fixture("bundle.json")).expect("fixture bundle loads")
}

/// A banner whose only localized field is `title`.
pub fn make_banner(title: Localized) -> Banner {
    Banner {
        title,
        ..Default::default()
    }
}

/// A service with a title and a markup description.
pub fn make_service(title: Localized, description: Localized) -> Service {
    Service {
        title,
        description,
        ..Default::default()
    }
}
