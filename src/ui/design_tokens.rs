// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every view, following the W3C Design Tokens standard.

## Organization

- **Palette**: Brand and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use alok_site::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb8(0x2D, 0x34, 0x36); // Body text
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_400: Color = Color::from_rgb8(0x9B, 0xA3, 0xB0); // Muted controls
    pub const GRAY_200: Color = Color::from_rgb8(0xD9, 0xDE, 0xE5); // Input borders
    pub const GRAY_100: Color = Color::from_rgb8(0xF4, 0xF6, 0xF8); // Section bands

    // Brand colors (navy scale)
    pub const NAVY_900: Color = Color::from_rgb8(0x1B, 0x36, 0x5D); // Primary brand
    pub const NAVY_700: Color = Color::from_rgb8(0x2A, 0x4D, 0x7F);
    pub const NAVY_100: Color = Color::from_rgb8(0xE6, 0xEC, 0xF4);

    // Accent (marker highlight, call to action)
    pub const ACCENT_500: Color = Color::from_rgb8(0xF5, 0xA6, 0x23);
    pub const ACCENT_600: Color = Color::from_rgb8(0xDB, 0x8E, 0x10);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x10, 0xB9, 0x81);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Header background before the page is scrolled
    pub const HEADER_RESTING: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 80.0; // Section padding
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 20.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Spinner inside the submit button
    pub const SPINNER: f32 = 20.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const INPUT_HEIGHT: f32 = 44.0;
    pub const TEXTAREA_HEIGHT: f32 = 140.0;
    pub const HEADER_HEIGHT: f32 = 80.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const FORM_MAX_WIDTH: f32 = 640.0;
    pub const TOAST_MAX_WIDTH: f32 = 400.0;
    pub const MENU_PANEL_WIDTH: f32 = 280.0;

    // Area map
    pub const MAP_HEIGHT: f32 = 360.0;
    pub const MAP_DOT: f32 = 16.0;
    pub const MAP_DOT_SELECTED: f32 = 22.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero heading
    //! - Titles: section headings
    //! - Body: content, labels, inputs
    //! - Caption: inline field errors

    pub const DISPLAY: f32 = 44.0;

    pub const TITLE_LG: f32 = 32.0;

    pub const TITLE_MD: f32 = 22.0;

    pub const BODY_LG: f32 = 17.0;

    pub const BODY: f32 = 15.0;

    /// 0.8125rem, the size of field error annotations
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Focused or invalid inputs
    pub const WIDTH_MD: f32 = 2.0;

    /// Toast accent stripe
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Scrolled header
    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.106, 0.212, 0.365, 0.08),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 12.0,
    };

    /// Toasts: `0 12px 32px rgba(27, 54, 93, 0.15)`
    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.106, 0.212, 0.365, 0.15),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HEADER_RESTING > 0.0 && opacity::HEADER_RESTING < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::MAP_DOT_SELECTED > sizing::MAP_DOT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_ACCENT > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
