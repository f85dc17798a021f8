// src/ui/mod.rs
//! quickdots UI system for embedded displays
//!
//! This module provides:
//! - Core traits for drawable elements and touch input types
//! - Host measure constraints
//! - Styling primitives (colors, padding, theme)
//! - The dot page indicator component

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::{Dot, QuickDots};
pub use core::{Drawable, MeasureSpec, TouchEvent, TouchPoint, TouchResult};
pub use styling::{ColorPalette, Padding, Spacing, Theme};
