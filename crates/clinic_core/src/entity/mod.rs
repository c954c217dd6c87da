/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Content records rendered by the clinic website.
//!
//! Each record mirrors one API resource. Localizable attributes are grouped
//! into [`Localized`] values; everything else is a plain optional string.


use crate::localized::Localized;

/// A record exposing localizable fields by logical name (`"title"`, not `"title_uz"`).
pub trait LocalizableEntity {
    /// Logical names of every localizable field, in declaration order.
    fn localized_fields(&self) -> &'static [&'static str];

    /// The per-suffix values of one logical field, or `None` for an unknown name.
    fn localized_field(&self, field: &str) -> Option<&Localized>;
}

content_record! {
    /// A landing-page banner slide.
    pub struct Banner {
        localized: [title, subtitle, description],
        text: [image, link],
    }
}

content_record! {
    /// A medical service offered by the clinic.
    pub struct Service {
        localized: [title, description],
        text: [image, icon, slug],
    }
}

content_record! {
    /// A frequently asked question. `answer` may contain markup.
    pub struct Faq {
        localized: [question, answer],
        text: [],
    }
}

content_record! {
    /// A headline statistic. `count` is the authored display value, e.g. `"70 000+"`.
    pub struct Statistic {
        localized: [title],
        text: [count],
    }
}

content_record! {
    /// A branch address.
    pub struct CompanyAddress {
        localized: [title, address],
        text: [map],
    }
}

content_record! {
    /// A contact phone number with a localized label.
    pub struct CompanyPhone {
        localized: [title],
        text: [phone],
    }
}

content_record! {
    /// Opening hours: localized day range, single-language hours.
    pub struct WorkTime {
        localized: [days],
        text: [hours],
    }
}

content_record! {
    pub struct SocialVideo {
        localized: [title],
        text: [video, thumbnail],
    }
}

content_record! {
    /// A link to one of the clinic's social network profiles.
    pub struct SocialLink {
        localized: [],
        text: [name, url, icon],
    }
}

content_record! {
    pub struct GalleryImage {
        localized: [alt],
        text: [image],
    }
}

content_record! {
    /// General company information shown in the header and footer.
    pub struct CompanyInfo {
        localized: [name, description, slogan],
        text: [logo, email],
    }
}

content_record! {
    /// The "about us" section. `content` is markup.
    pub struct About {
        localized: [title, content],
        text: [image],
    }
}
