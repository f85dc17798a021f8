//! Layout primitives for consistent spacing and dimensions

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing scale for consistent layout
///
/// The indicator takes its default dot radius and separation from this
/// scale, so themes that change spacing change the dots with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Small spacing (4px) - default dot radius
    pub small: u32,

    /// Medium spacing (8px) - default dot separation
    pub medium: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            small: 4,
            medium: 8,
        }
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Different vertical (12px) and horizontal (16px)
/// let p = Padding::symmetric(12, 16);
///
/// // Calculate total space consumed
/// let total_width = p.horizontal();  // left + right
/// let total_height = p.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Top padding (pixels)
    pub top: u32,

    /// Right padding (pixels)
    pub right: u32,

    /// Bottom padding (pixels)
    pub bottom: u32,

    /// Left padding (pixels)
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding
    ///
    /// # Arguments
    /// * `vertical` - Padding for top and bottom (pixels)
    /// * `horizontal` - Padding for left and right (pixels)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
