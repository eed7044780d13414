// SPDX-License-Identifier: MPL-2.0
//! Shared toast stylesheet.
//!
//! Every toast reads its look from one process-wide [`Stylesheet`]. It is
//! built on the first notification and never rebuilt.

use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing};
use iced::{Color, Padding, Shadow};
use std::sync::OnceLock;

use super::notification::Severity;

/// Identifier of the shared toast stylesheet.
pub const STYLESHEET_ID: &str = "notification-styles";

static STYLESHEET: OnceLock<Stylesheet> = OnceLock::new();

/// Visual rules shared by every toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub id: &'static str,
    /// Distance from the top edge of the window.
    pub top: f32,
    /// Distance from the right edge of the window.
    pub right: f32,
    pub padding: Padding,
    pub gap: f32,
    pub max_width: f32,
    pub radius: f32,
    pub background: Color,
    pub shadow: Shadow,
    pub accent_width: f32,
    pub success_accent: Color,
    pub error_accent: Color,
    pub close_color: Color,
    pub close_hover_color: Color,
    /// Horizontal distance travelled by the slide animation.
    pub slide_distance: f32,
}

impl Stylesheet {
    fn build() -> Self {
        Self {
            id: STYLESHEET_ID,
            top: 100.0,
            right: 20.0,
            padding: Padding {
                top: spacing::MD,
                bottom: spacing::MD,
                left: 20.0,
                right: 20.0,
            },
            gap: spacing::SM,
            max_width: sizing::TOAST_MAX_WIDTH,
            radius: radius::LG,
            background: palette::WHITE,
            shadow: shadow::LG,
            accent_width: border::WIDTH_ACCENT,
            success_accent: palette::SUCCESS_500,
            error_accent: palette::ERROR_500,
            close_color: palette::GRAY_400,
            close_hover_color: palette::GRAY_900,
            slide_distance: 100.0,
        }
    }

    #[must_use]
    pub fn accent(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success_accent,
            Severity::Error => self.error_accent,
        }
    }
}

/// Installs the stylesheet on first use and returns it.
///
/// Calling this any number of times yields the same instance.
pub fn ensure_installed() -> &'static Stylesheet {
    STYLESHEET.get_or_init(Stylesheet::build)
}

/// Returns the stylesheet if a notification has installed it.
#[must_use]
pub fn installed() -> Option<&'static Stylesheet> {
    STYLESHEET.get()
}
