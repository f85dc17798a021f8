//! Color definitions and palette management
//!
//! All colors use the RGB565 format of 16-bit embedded displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Accent color - bright teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

// ============================================================================
// Dot Colors
// ============================================================================

/// Default color of the selected dot
pub const COLOR_SELECTED_DOT: Rgb565 = COLOR_ACCENT;

/// Default color of every other dot - medium gray
pub const COLOR_UNSELECTED_DOT: Rgb565 = Rgb565::new(16, 32, 16);

// ============================================================================
// Neutral Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Dark gray - for subtle elements on light backgrounds
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent UI theming.
///
/// Supports both dark and light themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent color - used for the selected dot
    pub primary: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Muted color - used for unselected dots
    pub muted: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark theme palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Creates a dark theme palette (default)
    pub fn dark() -> Self {
        Self {
            primary: COLOR_SELECTED_DOT,
            background: COLOR_BACKGROUND,
            muted: COLOR_UNSELECTED_DOT,
        }
    }

    /// Creates a light theme palette
    pub fn light() -> Self {
        Self {
            primary: COLOR_SELECTED_DOT,
            background: WHITE,
            muted: DARK_GRAY,
        }
    }
}
