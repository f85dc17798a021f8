//! Global theme management
//!
//! Combines color palette and spacing into the default appearance every
//! indicator starts from before its [`DotsConfig`](crate::config::DotsConfig)
//! is applied.

use embedded_graphics::pixelcolor::Rgb565;

use super::colors::ColorPalette;
use super::layout::Spacing;

/// Global theme configuration
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::default();
/// let dots = QuickDots::new(&DotsConfig::new().with_count(4), &theme)?;
///
/// // Dots follow the palette
/// assert_eq!(dots.selected_color(), theme.palette.primary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// The active color palette (dark or light)
    pub palette: ColorPalette,

    /// Spacing scale for consistent layout
    pub spacing: Spacing,
}

impl Default for Theme {
    /// Returns the default theme (dark mode)
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Creates a dark theme
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            spacing: Spacing::default(),
        }
    }

    /// Creates a light theme
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            spacing: Spacing::default(),
        }
    }

    pub fn selected_dot_color(&self) -> Rgb565 {
        self.palette.primary
    }

    pub fn unselected_dot_color(&self) -> Rgb565 {
        self.palette.muted
    }

    /// Default dot radius in pixels
    pub fn dot_radius(&self) -> i32 {
        i32::try_from(self.spacing.small).unwrap_or(i32::MAX)
    }

    /// Default gap between dot edges in pixels
    pub fn dot_separation(&self) -> i32 {
        i32::try_from(self.spacing.medium).unwrap_or(i32::MAX)
    }
}
