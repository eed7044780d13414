// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration and timing constants.
//!
//! # Categories
//!
//! - **Contact**: Mail backend defaults
//! - **Notifications**: Toast lifecycle timing
//! - **Page**: Scroll and reveal behavior

use std::time::Duration;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Delay before the simulated backend answers (in milliseconds).
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

/// Upper bound for the simulated delay (in milliseconds).
pub const MAX_SIMULATED_DELAY_MS: u64 = 30_000;

/// Mailbox that receives contact requests.
pub const DEFAULT_RECIPIENT: &str = "post@alok.no";

/// Sender address used by the Resend backend.
pub const DEFAULT_SENDER: &str = "nettside@alok.no";

/// Environment variable holding the Resend API key.
pub const DEFAULT_API_KEY_ENV: &str = "RESEND_API_KEY";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Length of the enter and leave transitions.
pub const NOTIFICATION_TRANSITION: Duration = Duration::from_millis(300);

/// Time a toast stays up before dismissing itself.
pub const NOTIFICATION_AUTO_DISMISS: Duration = Duration::from_millis(5000);

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Scroll offset past which the header switches to its scrolled style.
pub const HEADER_SCROLL_THRESHOLD: f32 = 20.0;

/// Space left above a section when scrolling to an anchor.
pub const ANCHOR_HEADER_OFFSET: f32 = 100.0;

/// Duration of the smooth anchor scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(500);

/// Window width below which the navigation collapses behind a toggle.
pub const COMPACT_LAYOUT_WIDTH: f32 = 900.0;

/// Visible fraction at which a section is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Pulls the bottom edge of the observed viewport up by this much.
pub const REVEAL_BOTTOM_MARGIN: f32 = 80.0;

/// Fade-in duration for revealed sections.
pub const REVEAL_FADE_DURATION: Duration = Duration::from_millis(600);
