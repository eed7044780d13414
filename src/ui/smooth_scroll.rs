// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling to in-page anchors.
//!
//! Following an anchor scrolls the page so the section starts
//! [`ANCHOR_HEADER_OFFSET`] below the top of the viewport, leaving room for
//! the floating header. The scroll eases in and out over
//! [`SMOOTH_SCROLL_DURATION`]; the app applies each frame's offset with a
//! scroll operation.

use crate::app::config::{ANCHOR_HEADER_OFFSET, SMOOTH_SCROLL_DURATION};
use crate::ui::sections::SectionId;
use std::time::{Duration, Instant};

/// Scroll offset that puts `section` just below the header.
///
/// Clamped to `0.0..=max_offset`.
#[must_use]
pub fn target_offset(section: SectionId, max_offset: f32) -> f32 {
    (section.top() - ANCHOR_HEADER_OFFSET).clamp(0.0, max_offset.max(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

#[derive(Debug, Default)]
pub struct SmoothScroll {
    animation: Option<Animation>,
}

impl SmoothScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts scrolling to the section named by `anchor`.
    ///
    /// A bare `#` or an id naming no section is ignored and returns `None`.
    pub fn follow_anchor(
        &mut self,
        anchor: &str,
        current_offset: f32,
        max_offset: f32,
        now: Instant,
    ) -> Option<SectionId> {
        let section = SectionId::from_anchor(anchor)?;
        self.scroll_to(section, current_offset, max_offset, now);
        Some(section)
    }

    /// Starts scrolling to `section`, replacing any running scroll.
    pub fn scroll_to(
        &mut self,
        section: SectionId,
        current_offset: f32,
        max_offset: f32,
        now: Instant,
    ) {
        self.animation = Some(Animation {
            from: current_offset,
            to: target_offset(section, max_offset),
            started: now,
            duration: SMOOTH_SCROLL_DURATION,
        });
    }

    /// Returns the offset to apply at `now`, or `None` when idle.
    ///
    /// The final frame lands exactly on the target and ends the animation.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let elapsed = now.saturating_duration_since(animation.started);

        if elapsed >= animation.duration {
            self.animation = None;
            return Some(animation.to);
        }

        let t = elapsed.as_secs_f32() / animation.duration.as_secs_f32();
        Some(animation.from + (animation.to - animation.from) * ease_in_out(t))
    }

    /// Stops a running scroll where it is.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Cubic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
