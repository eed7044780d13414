// SPDX-License-Identifier: MPL-2.0
//! Reveal-on-scroll for page sections.
//!
//! Sections below the hero start hidden. A section is revealed the first
//! time at least [`REVEAL_THRESHOLD`] of its height lies inside the viewport,
//! where the viewport's bottom edge is pulled up by [`REVEAL_BOTTOM_MARGIN`].
//! Once revealed a section fades in over [`REVEAL_FADE_DURATION`] and is no
//! longer observed.

use crate::app::config::{REVEAL_BOTTOM_MARGIN, REVEAL_FADE_DURATION, REVEAL_THRESHOLD};
use crate::ui::sections::{Band, SectionId};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Entry {
    section: SectionId,
    band: Band,
    revealed_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    entries: Vec<Entry>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(
            SectionId::ALL
                .into_iter()
                .filter(|s| *s != SectionId::Hero),
        )
    }
}

impl RevealTracker {
    /// Tracks `sections` at their page bands.
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            entries: sections
                .into_iter()
                .map(|section| Entry {
                    section,
                    band: section.band(),
                    revealed_at: None,
                })
                .collect(),
        }
    }

    /// Checks unrevealed sections against the viewport and reveals those
    /// that cross the threshold. Returns the newly revealed sections.
    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32, now: Instant) -> Vec<SectionId> {
        let root_top = viewport_top;
        let root_bottom = viewport_top + (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);

        let mut revealed = Vec::new();
        for entry in self.entries.iter_mut().filter(|e| e.revealed_at.is_none()) {
            if intersection_ratio(entry.band, root_top, root_bottom) >= REVEAL_THRESHOLD {
                entry.revealed_at = Some(now);
                revealed.push(entry.section);
            }
        }
        revealed
    }

    /// Opacity of `section` at `now`. Untracked sections are always opaque.
    #[must_use]
    pub fn opacity(&self, section: SectionId, now: Instant) -> f32 {
        let Some(entry) = self.entries.iter().find(|e| e.section == section) else {
            return 1.0;
        };
        match entry.revealed_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / REVEAL_FADE_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.entries
            .iter()
            .find(|e| e.section == section)
            .is_none_or(|e| e.revealed_at.is_some())
    }

    /// Returns whether any fade is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|e| {
            e.revealed_at
                .is_some_and(|at| now.saturating_duration_since(at) < REVEAL_FADE_DURATION)
        })
    }
}

/// Fraction of `band` inside `[root_top, root_bottom]`.
fn intersection_ratio(band: Band, root_top: f32, root_bottom: f32) -> f32 {
    if band.height <= 0.0 {
        return 0.0;
    }
    let visible = (band.bottom().min(root_bottom) - band.top.max(root_top)).max(0.0);
    visible / band.height
}
