/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A snapshot of everything the content API serves for the site.

use crate::entity::{
    About, Banner, CompanyAddress, CompanyInfo, CompanyPhone, Faq, GalleryImage, Service,
    SocialLink, SocialVideo, Statistic, WorkTime,
};
use serde::{Deserialize, Serialize};

/// All content collections. Every collection is optional in input.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBundle {
    pub banners: Vec<Banner>,
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
    pub statistics: Vec<Statistic>,
    pub addresses: Vec<CompanyAddress>,
    pub phones: Vec<CompanyPhone>,
    pub work_times: Vec<WorkTime>,
    pub social_videos: Vec<SocialVideo>,
    pub social_links: Vec<SocialLink>,
    pub gallery: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
}

impl ContentBundle {
    /// Record counts per collection, for summaries.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("banners", self.banners.len()),
            ("services", self.services.len()),
            ("faqs", self.faqs.len()),
            ("statistics", self.statistics.len()),
            ("addresses", self.addresses.len()),
            ("phones", self.phones.len()),
            ("work_times", self.work_times.len()),
            ("social_videos", self.social_videos.len()),
            ("social_links", self.social_links.len()),
            ("gallery", self.gallery.len()),
            ("company_info", usize::from(self.company_info.is_some())),
            ("about", usize::from(self.about.is_some())),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.counts().iter().all(|(_, n)| *n == 0)
    }
}
