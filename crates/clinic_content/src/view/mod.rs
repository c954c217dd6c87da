/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Display-ready views of content records.
//!
//! A [`ContentResolver`] binds a site configuration to the active UI
//! language and turns records into plain views: every localizable field
//! resolved, markup cleaned, counters and phone links prepared. Views are
//! what the rendering layer consumes.


use crate::format::{extract_numeric_value, tel_href, video_embed_url};
use crate::markup::{clean_markup, plain_text};
use crate::resolve::resolve_text;
use clinic_core::{
    resolve_api_suffix, About, ApiSuffix, Banner, CompanyAddress, CompanyInfo, CompanyPhone,
    ContentBundle, Faq, GalleryImage, Localized, RecordId, Service, SiteConfig, SocialLink,
    SocialVideo, Statistic, Surface, WorkTime,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub id: Option<RecordId>,
    pub title: String,
    pub subtitle: String,
    /// Cleaned markup.
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: Option<RecordId>,
    pub title: String,
    /// Cleaned markup.
    pub description: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqView {
    pub id: Option<RecordId>,
    pub question: String,
    /// Cleaned markup.
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticView {
    pub id: Option<RecordId>,
    pub title: String,
    /// The authored value, shown before the counter animates.
    pub display: String,
    /// The number the counter animates to.
    pub target: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressView {
    pub id: Option<RecordId>,
    pub title: String,
    pub address: String,
    pub map: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneView {
    pub id: Option<RecordId>,
    pub title: String,
    /// The number as authored.
    pub phone: String,
    pub tel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkTimeView {
    pub id: Option<RecordId>,
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialVideoView {
    pub id: Option<RecordId>,
    pub title: String,
    pub video: Option<String>,
    pub embed: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImageView {
    pub id: Option<RecordId>,
    pub image: Option<String>,
    /// Plain text, usable as an `alt` attribute.
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfoView {
    pub name: String,
    /// Cleaned markup.
    pub description: String,
    pub slogan: String,
    pub logo: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub title: String,
    /// Cleaned markup.
    pub content: String,
    pub image: Option<String>,
}

/// A whole [`ContentBundle`] resolved for one UI language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleView {
    pub language: String,
    pub banners: Vec<BannerView>,
    pub services: Vec<ServiceView>,
    pub faqs: Vec<FaqView>,
    pub statistics: Vec<StatisticView>,
    pub addresses: Vec<AddressView>,
    pub phones: Vec<PhoneView>,
    pub work_times: Vec<WorkTimeView>,
    pub social_videos: Vec<SocialVideoView>,
    pub social_links: Vec<SocialLink>,
    pub gallery: Vec<GalleryImageView>,
    pub company_info: Option<CompanyInfoView>,
    pub about: Option<AboutView>,
}

/// Resolves records for one UI language under a site configuration.
pub struct ContentResolver<'a> {
    config: &'a SiteConfig,
    ui_language: String,
}

impl<'a> ContentResolver<'a> {
    pub fn new(config: &'a SiteConfig, ui_language: impl Into<String>) -> Self {
        Self {
            config,
            ui_language: ui_language.into(),
        }
    }

    pub fn ui_language(&self) -> &str {
        &self.ui_language
    }

    /// The API suffix read on `surface`, under that surface's policy.
    pub fn suffix_for(&self, surface: Surface) -> ApiSuffix {
        resolve_api_suffix(&self.ui_language, self.config.policy_for(surface))
    }

    /// A field with blank rendering when nothing resolves.
    fn text(&self, surface: Surface, value: &Localized) -> String {
        resolve_text(value, self.suffix_for(surface), "")
    }

    /// A title-like field, falling back to the configured placeholder.
    fn title(&self, surface: Surface, value: &Localized) -> String {
        let suffix = self.suffix_for(surface);
        resolve_text(value, suffix, self.config.placeholder(suffix))
    }

    fn markup(&self, surface: Surface, value: &Localized) -> String {
        let text = self.text(surface, value);
        if self.config.cleans_markup() {
            clean_markup(&text)
        } else {
            text
        }
    }

    pub fn banner(&self, banner: &Banner) -> BannerView {
        let s = Surface::Banners;
        BannerView {
            id: banner.id.clone(),
            title: self.title(s, &banner.title),
            subtitle: self.text(s, &banner.subtitle),
            description: self.markup(s, &banner.description),
            image: banner.image.clone(),
            link: banner.link.clone(),
        }
    }

    pub fn service(&self, service: &Service) -> ServiceView {
        let s = Surface::Services;
        ServiceView {
            id: service.id.clone(),
            title: self.title(s, &service.title),
            description: self.markup(s, &service.description),
            image: service.image.clone(),
            icon: service.icon.clone(),
            slug: service.slug.clone(),
        }
    }

    pub fn faq(&self, faq: &Faq) -> FaqView {
        let s = Surface::Faqs;
        FaqView {
            id: faq.id.clone(),
            question: self.title(s, &faq.question),
            answer: self.markup(s, &faq.answer),
        }
    }

    pub fn statistic(&self, statistic: &Statistic) -> StatisticView {
        let display = statistic.count.clone().unwrap_or_default();
        StatisticView {
            id: statistic.id.clone(),
            title: self.title(Surface::Statistics, &statistic.title),
            target: extract_numeric_value(&display),
            display,
        }
    }

    pub fn address(&self, address: &CompanyAddress) -> AddressView {
        let s = Surface::Addresses;
        AddressView {
            id: address.id.clone(),
            title: self.title(s, &address.title),
            address: self.text(s, &address.address),
            map: address.map.clone(),
        }
    }

    pub fn phone(&self, phone: &CompanyPhone) -> PhoneView {
        let number = phone.phone.clone().unwrap_or_default();
        PhoneView {
            id: phone.id.clone(),
            title: self.text(Surface::Phones, &phone.title),
            tel: tel_href(&number),
            phone: number.trim().to_string(),
        }
    }

    pub fn work_time(&self, work_time: &WorkTime) -> WorkTimeView {
        WorkTimeView {
            id: work_time.id.clone(),
            days: self.text(Surface::WorkTimes, &work_time.days),
            hours: work_time.hours.clone().unwrap_or_default(),
        }
    }

    pub fn social_video(&self, video: &SocialVideo) -> SocialVideoView {
        SocialVideoView {
            id: video.id.clone(),
            title: self.title(Surface::SocialVideos, &video.title),
            embed: video.video.as_deref().and_then(video_embed_url),
            video: video.video.clone(),
            thumbnail: video.thumbnail.clone(),
        }
    }

    pub fn gallery_image(&self, image: &GalleryImage) -> GalleryImageView {
        GalleryImageView {
            id: image.id.clone(),
            image: image.image.clone(),
            alt: plain_text(&self.text(Surface::Gallery, &image.alt)),
        }
    }

    pub fn company_info(&self, info: &CompanyInfo) -> CompanyInfoView {
        let s = Surface::CompanyInfo;
        CompanyInfoView {
            name: self.title(s, &info.name),
            description: self.markup(s, &info.description),
            slogan: self.text(s, &info.slogan),
            logo: info.logo.clone(),
            email: info.email.clone(),
        }
    }

    pub fn about(&self, about: &About) -> AboutView {
        let s = Surface::About;
        AboutView {
            title: self.title(s, &about.title),
            content: self.markup(s, &about.content),
            image: about.image.clone(),
        }
    }

    pub fn bundle(&self, bundle: &ContentBundle) -> BundleView {
        BundleView {
            language: self.ui_language.clone(),
            banners: bundle.banners.iter().map(|b| self.banner(b)).collect(),
            services: bundle.services.iter().map(|s| self.service(s)).collect(),
            faqs: bundle.faqs.iter().map(|f| self.faq(f)).collect(),
            statistics: bundle.statistics.iter().map(|s| self.statistic(s)).collect(),
            addresses: bundle.addresses.iter().map(|a| self.address(a)).collect(),
            phones: bundle.phones.iter().map(|p| self.phone(p)).collect(),
            work_times: bundle.work_times.iter().map(|w| self.work_time(w)).collect(),
            social_videos: bundle
                .social_videos
                .iter()
                .map(|v| self.social_video(v))
                .collect(),
            social_links: bundle.social_links.clone(),
            gallery: bundle.gallery.iter().map(|g| self.gallery_image(g)).collect(),
            company_info: bundle.company_info.as_ref().map(|c| self.company_info(c)),
            about: bundle.about.as_ref().map(|a| self.about(a)),
        }
    }
}
