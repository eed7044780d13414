// SPDX-License-Identifier: MPL-2.0
//! Header scroll state.
//!
//! The header floats over the page. Once the page has scrolled past
//! [`HEADER_SCROLL_THRESHOLD`] it turns opaque and casts a shadow.

use crate::app::config::HEADER_SCROLL_THRESHOLD;
use crate::ui::design_tokens::{opacity, palette, shadow};
use iced::widget::container;
use iced::{Background, Color, Theme};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
}

impl HeaderState {
    /// Creates the state for a page at `offset_y`.
    #[must_use]
    pub fn at(offset_y: f32) -> Self {
        let mut state = Self::default();
        state.on_scroll(offset_y);
        state
    }

    /// Updates the state from the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset_y: f32) {
        self.scrolled = offset_y > HEADER_SCROLL_THRESHOLD;
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Container style for the header bar.
pub fn style(state: HeaderState) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if state.scrolled {
            container::Style {
                background: Some(Background::Color(palette::WHITE)),
                shadow: shadow::SM,
                ..container::Style::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::HEADER_RESTING,
                    ..palette::WHITE
                })),
                shadow: shadow::NONE,
                ..container::Style::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_top_is_not_scrolled() {
        assert!(!HeaderState::at(0.0).is_scrolled());
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!HeaderState::at(20.0).is_scrolled());
        assert!(HeaderState::at(20.5).is_scrolled());
    }

    #[test]
    fn scrolling_back_up_clears_state() {
        let mut state = HeaderState::at(300.0);
        assert!(state.is_scrolled());
        state.on_scroll(10.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn scrolled_style_adds_shadow() {
        let theme = Theme::Light;
        let resting = style(HeaderState::at(0.0))(&theme);
        let scrolled = style(HeaderState::at(100.0))(&theme);
        assert_eq!(resting.shadow, shadow::NONE);
        assert_eq!(scrolled.shadow, shadow::SM);
    }
}
