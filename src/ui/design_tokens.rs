// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the popup and the demo host.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Popup geometry (badge and card)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation durations that are purely cosmetic

## Examples

```
use iced_popup::ui::design_tokens::{palette, sizing};

let accent = palette::SUCCESS_500;
let badge = sizing::BADGE; // 64px circle
assert!(sizing::CARD_WIDTH > badge);
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Success (green scale)
    pub const SUCCESS_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const SUCCESS_800: Color = Color::from_rgb(0.086, 0.396, 0.204);

    // Error (red scale)
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_800: Color = Color::from_rgb(0.600, 0.106, 0.106);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Icon badge inside the popup.
    pub const ICON_BADGE: f32 = 32.0;

    /// Collapsed popup: a circle of this diameter.
    pub const BADGE: f32 = 64.0;

    /// Expanded card dimensions.
    pub const CARD_WIDTH: f32 = 320.0;
    pub const CARD_HEIGHT: f32 = 80.0;

    /// Countdown bar along the bottom edge of the card.
    pub const TIMER_BAR_HEIGHT: f32 = 6.0;

    pub const BUTTON_HEIGHT: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Icon glyph inside the badge.
    pub const ICON: f32 = 18.0;

    /// Standard body - popup message, button labels
    pub const BODY: f32 = 14.0;

    /// Caption - dismiss glyph
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    /// Expanded card corners.
    pub const LG: f32 = 12.0;
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Badge <-> card morph.
    pub const MORPH: Duration = Duration::from_millis(400);

    /// Icon fade/scale-in after the popup becomes visible.
    pub const ICON_ENTRANCE: Duration = Duration::from_millis(300);

    /// Initial icon scale at the start of its entrance.
    pub const ICON_START_SCALE: f32 = 0.6;

    /// Popup rise and fade-in after it becomes visible.
    pub const SLIDE_IN: Duration = Duration::from_millis(400);

    /// How far below its resting place the popup starts rising, in pixels.
    pub const SLIDE_DISTANCE: f32 = 100.0;

    /// Card content fades, counted from the start of the expand morph.
    pub const CONTENT_FADE_DELAY: Duration = Duration::from_millis(200);
    pub const ICON_FADE_DELAY: Duration = Duration::from_millis(300);
    pub const MESSAGE_FADE_DELAY: Duration = Duration::from_millis(500);
    pub const FADE: Duration = Duration::from_millis(300);

    /// Redraw cadence while something animates (~60 fps).
    pub const FRAME: Duration = Duration::from_millis(16);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    // Sizing validation
    assert!(sizing::CARD_WIDTH > sizing::BADGE);
    assert!(sizing::CARD_HEIGHT > sizing::BADGE);
    assert!(sizing::BADGE > sizing::ICON_BADGE);
    assert!(sizing::TIMER_BAR_HEIGHT < sizing::CARD_HEIGHT);

    // Typography validation
    assert!(typography::ICON > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Motion validation
    assert!(motion::ICON_START_SCALE > 0.0 && motion::ICON_START_SCALE < 1.0);
    assert!(motion::SLIDE_DISTANCE > 0.0);
};
