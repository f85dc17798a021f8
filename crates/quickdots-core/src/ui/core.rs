// src/ui/core.rs
//! Core UI traits and types shared by the indicator and its hosts

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event moved a pager to the given page
    PageChanged(usize),
}

/// Size constraint a host hands to an element when measuring it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The element must be exactly this size
    Exactly(u32),
    /// The element may be at most this size
    AtMost(u32),
    /// No constraint, the element takes what it asks for
    Unspecified,
}

impl MeasureSpec {
    /// Reconcile a desired size with this constraint
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);
}
