//! Styling system for UI elements
//!
//! - [`colors`] - Color constants and palette management
//! - [`layout`] - Spacing and padding
//! - [`theme`] - Theme combining palette and spacing into indicator defaults

pub mod colors;
pub mod layout;
pub mod theme;

pub use colors::{COLOR_BACKGROUND, COLOR_SELECTED_DOT, COLOR_UNSELECTED_DOT, ColorPalette, WHITE};
pub use layout::{Padding, Spacing};
pub use theme::Theme;
