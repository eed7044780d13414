// SPDX-License-Identifier: MPL-2.0
//! Page sections and their layout bands.
//!
//! Each section is rendered at a fixed height, so its position in the page
//! is known without querying the widget tree. Smooth scrolling and the
//! reveal tracker both work from these bands.

/// A page section that can be the target of an in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Services,
    About,
    Area,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Services,
        SectionId::About,
        SectionId::Area,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bar, in display order.
    pub const NAV: [SectionId; 4] = [
        SectionId::Services,
        SectionId::About,
        SectionId::Area,
        SectionId::Contact,
    ];

    /// Anchor id without the leading `#`.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hjem",
            SectionId::Services => "tjenester",
            SectionId::About => "om-oss",
            SectionId::Area => "omrade",
            SectionId::Contact => "kontakt",
        }
    }

    /// Looks up a section by anchor id, with or without the leading `#`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == id)
    }

    /// i18n key of the navigation link label.
    #[must_use]
    pub fn nav_label_key(self) -> &'static str {
        match self {
            SectionId::Hero => "nav-home",
            SectionId::Services => "nav-services",
            SectionId::About => "nav-about",
            SectionId::Area => "nav-area",
            SectionId::Contact => "nav-contact",
        }
    }

    /// Rendered height in pixels.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            SectionId::Hero => 640.0,
            SectionId::Services => 760.0,
            SectionId::About => 600.0,
            SectionId::Area => 680.0,
            SectionId::Contact => 1000.0,
        }
    }

    /// Vertical position of the section's top edge in the page.
    #[must_use]
    pub fn top(self) -> f32 {
        Self::ALL
            .into_iter()
            .take_while(|s| *s != self)
            .map(SectionId::height)
            .sum()
    }

    /// `(top, height)` band of the section.
    #[must_use]
    pub fn band(self) -> Band {
        Band {
            top: self.top(),
            height: self.height(),
        }
    }
}

/// Height of the footer below the last section.
pub const FOOTER_HEIGHT: f32 = 180.0;

/// Total height of the scrollable page.
#[must_use]
pub fn page_height() -> f32 {
    SectionId::ALL.into_iter().map(SectionId::height).sum::<f32>() + FOOTER_HEIGHT
}

/// A vertical span of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub height: f32,
}

impl Band {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}
