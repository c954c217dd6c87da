/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Integration tests resolving a full content bundle for a UI language.

mod common;

use clinic_content::ContentResolver;
use clinic_core::SiteConfig;
use common::sample_bundle;

#[test]
fn test_bundle_resolved_for_russian() {
    let bundle = sample_bundle();
    let config = SiteConfig::default();
    let view = ContentResolver::new(&config, "ru").bundle(&bundle);

    assert_eq!(view.banners[0].title, "Ваше здоровье важно для нас");
    assert_eq!(
        view.banners[0].description,
        "<p>Современное оборудование<br>и опытные врачи</p>"
    );

    assert_eq!(view.services[0].title, "Кардиология");
    assert_eq!(
        view.services[0].description,
        "<strong>Юрак</strong> касалликлари"
    );
    assert_eq!(view.services[1].title, "Nevrologiya");

    assert_eq!(view.faqs[0].question, "Как записаться на приём?");
    assert_eq!(view.faqs[0].answer, "Call-markaz orqali<br>yoki saytda");

    assert_eq!(view.statistics[0].title, "Bemorlar");
    assert_eq!(view.statistics[0].target, 70000);
    assert_eq!(view.statistics[1].display, "25");
    assert_eq!(view.statistics[1].target, 25);

    assert_eq!(view.addresses[0].address, "Ташкент, Чиланзар 9");
    assert_eq!(view.addresses[0].title, "");
    assert_eq!(view.phones[0].tel.as_deref(), Some("tel:+998555140333"));
    assert_eq!(view.work_times[0].days, "Понедельник - Суббота");
    assert_eq!(view.work_times[0].hours, "08:00 - 18:00");
    assert_eq!(view.social_videos[0].title, "О клинике");
    assert_eq!(
        view.social_videos[0].embed.as_deref(),
        Some("https://www.youtube.com/embed/abc123XYZ_-")
    );
    assert_eq!(view.gallery[0].alt, "Qabulxona");

    let info = view.company_info.as_ref().unwrap();
    assert_eq!(info.name, "Клиника Шифо");
    assert_eq!(info.email.as_deref(), Some("info@clinic.example"));

    let about = view.about.as_ref().unwrap();
    assert_eq!(about.title, "About us");
    assert_eq!(
        about.content,
        "<p>Founded in 2010.</p><br><p>Over 40 doctors.</p>"
    );
}

#[test]
fn test_unknown_language_uses_each_surface_policy() {
    let bundle = sample_bundle();
    let config = SiteConfig::default();
    let view = ContentResolver::new(&config, "fr").bundle(&bundle);

    // Banners read Latin Uzbek, services read Cyrillic Uzbek.
    assert_eq!(view.banners[0].title, "Sog'lig'ingiz biz uchun muhim");
    assert_eq!(view.services[0].title, "Кардиология");
    assert_eq!(view.services[0].description, "<strong>Юрак</strong> касалликлари");
    assert_eq!(view.faqs[0].question, "Qabulga qanday yozilish mumkin?");
}

#[test]
fn test_bundle_view_serializes() {
    let bundle = sample_bundle();
    let config = SiteConfig::default();
    let view = ContentResolver::new(&config, "en").bundle(&bundle);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["language"], "en");
    assert_eq!(json["statistics"][0]["title"], "Patients");
    assert_eq!(json["services"][0]["title"], "Cardiology");
    assert_eq!(json["social_links"][0]["name"], "Instagram");
    assert_eq!(json["banners"][0]["title"], "Sog'lig'ingiz biz uchun muhim");
}
