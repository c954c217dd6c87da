/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Integration tests for counters, phone links and video embeds.

use clinic_content::{
    extract_numeric_value, format_counter_value, format_counter_value_with,
    normalize_phone_for_tel, tel_href, video_embed_url,
};

#[test]
fn test_extract_numeric_value() {
    assert_eq!(extract_numeric_value("70 000+"), 70000);
    assert_eq!(extract_numeric_value("7"), 7);
    assert_eq!(extract_numeric_value(""), 0);
    assert_eq!(extract_numeric_value("abc"), 0);
    assert_eq!(extract_numeric_value("98%"), 98);
    assert_eq!(extract_numeric_value("1,250"), 1250);
}

#[test]
fn test_format_counter_value() {
    assert_eq!(format_counter_value(0, "30 000+"), "30 000+");
    assert_eq!(format_counter_value(15000, "15 000+"), "15,000+");
    assert_eq!(format_counter_value(7, "7"), "7");
    assert_eq!(format_counter_value(1234, "98%"), "1,234%");
    assert_eq!(format_counter_value(12, "yillik tajriba"), "12");
}

#[test]
fn test_format_counter_value_with_separator() {
    assert_eq!(format_counter_value_with(70000, "70 000+", " "), "70 000+");
    assert_eq!(format_counter_value_with(0, "", " "), "");
}

#[test]
fn test_normalize_phone_for_tel() {
    assert_eq!(normalize_phone_for_tel("998 55 514 03 33"), "+998555140333");
    assert_eq!(normalize_phone_for_tel("+998 55 514 03 33"), "+998555140333");
    assert_eq!(normalize_phone_for_tel("  +998\t71 200-00-00 "), "+99871200-00-00");
    assert_eq!(normalize_phone_for_tel("   "), "");
}

#[test]
fn test_tel_href() {
    assert_eq!(
        tel_href("998 55 514 03 33").as_deref(),
        Some("tel:+998555140333")
    );
    assert_eq!(tel_href(""), None);
}

#[test]
fn test_video_embed_url() {
    let expected = Some("https://www.youtube.com/embed/abc123XYZ_-".to_string());
    assert_eq!(video_embed_url("https://www.youtube.com/watch?v=abc123XYZ_-"), expected);
    assert_eq!(video_embed_url("https://youtube.com/watch?feature=share&v=abc123XYZ_-"), expected);
    assert_eq!(video_embed_url("https://m.youtube.com/watch?v=abc123XYZ_-"), expected);
    assert_eq!(video_embed_url("https://youtu.be/abc123XYZ_-?si=xyz"), expected);
    assert_eq!(video_embed_url("https://www.youtube.com/shorts/abc123XYZ_-"), expected);
    assert_eq!(video_embed_url("https://www.youtube.com/embed/abc123XYZ_-"), expected);

    assert_eq!(video_embed_url("https://vimeo.com/12345"), None);
    assert_eq!(video_embed_url("https://www.youtube.com/watch"), None);
    assert_eq!(video_embed_url("not a url"), None);
    assert_eq!(video_embed_url(""), None);
}
