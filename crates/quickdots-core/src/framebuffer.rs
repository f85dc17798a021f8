//! Heap-backed framebuffer with per-pixel change detection.
//!
//! Widgets draw into this RAM buffer instead of a hardware display. After
//! drawing, only the rectangular region containing changed pixels needs to be
//! flushed to the real display. Hosts without a display (tests, the demo) read
//! pixels back with [`FrameBuffer::pixel`].

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Framebuffer implementing `DrawTarget<Color = Rgb565>`.
///
/// Tracks a dirty bounding box so that only changed pixels are flushed to the
/// hardware display.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer of `size` filled with `background`.
    ///
    /// The initial fill does not count as a change.
    pub fn new(size: Size, background: Rgb565) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;
        Self {
            width,
            height,
            pixels: vec![background; width * height],
            dirty: None,
        }
    }

    /// Color at `point`, or `None` outside the buffer
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Region changed since the last flush, without resetting it
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(DirtyRect::to_rectangle)
    }

    /// Region changed since the last flush; resets the dirty state.
    pub fn take_dirty_area(&mut self) -> Option<Rectangle> {
        self.dirty.take().map(DirtyRect::to_rectangle)
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a display, then reset the dirty state.
    ///
    /// Only the bounding rectangle of changed pixels is sent, via
    /// `fill_contiguous`. If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let area = rect.to_rectangle();

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, rect.min_x, rect.min_y
        );

        // Borrow the pixel slice so the closure captures a shared reference,
        // avoiding the `FnMut` escaping-reference issue with `&mut self`.
        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.width;
        let h = self.height;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.width;
        let h = self.height;

        // Clip in signed space so parts left of or above the buffer are cut off
        let left = i64::from(area.top_left.x);
        let top = i64::from(area.top_left.y);
        let x_start = left.clamp(0, w as i64) as usize;
        let y_start = top.clamp(0, h as i64) as usize;
        let x_end = (left + i64::from(area.size.width)).clamp(0, w as i64) as usize;
        let y_end = (top + i64::from(area.size.height)).clamp(0, h as i64) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::Drawable;

    #[test]
    fn test_new_buffer_is_clean() {
        let fb = FrameBuffer::new(Size::new(4, 3), Rgb565::BLACK);

        assert_eq!(fb.size(), Size::new(4, 3));
        assert_eq!(fb.pixel(Point::new(3, 2)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(4, 0)), None);
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
        assert_eq!(fb.dirty_area(), None);
    }

    #[test]
    fn test_dirty_area_tracks_changes() {
        let mut fb = FrameBuffer::new(Size::new(10, 10), Rgb565::BLACK);

        Pixel(Point::new(2, 3), Rgb565::RED).draw(&mut fb).unwrap();
        Pixel(Point::new(5, 1), Rgb565::RED).draw(&mut fb).unwrap();
        // Same color as before, not a change
        Pixel(Point::new(9, 9), Rgb565::BLACK).draw(&mut fb).unwrap();

        assert_eq!(
            fb.take_dirty_area(),
            Some(Rectangle::new(Point::new(2, 1), Size::new(4, 3)))
        );
        assert_eq!(fb.take_dirty_area(), None);
    }

    #[test]
    fn test_fill_solid_clamps_to_buffer() {
        let mut fb = FrameBuffer::new(Size::new(4, 4), Rgb565::BLACK);
        let area = Rectangle::new(Point::new(2, 2), Size::new(10, 10));

        fb.fill_solid(&area, Rgb565::GREEN).unwrap();

        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(2, 2), Size::new(2, 2)))
        );
    }

    #[test]
    fn test_fill_solid_cuts_off_left_and_top() {
        let mut fb = FrameBuffer::new(Size::new(12, 4), Rgb565::BLACK);
        let area = Rectangle::new(Point::new(-5, -2), Size::new(10, 3));

        fb.fill_solid(&area, Rgb565::RED).unwrap();

        // Only x in [0, 5) and y in [0, 1) are inside the rectangle
        assert_eq!(fb.pixel(Point::new(4, 0)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(5, 0)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(7, 0)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(0, 1)), Some(Rgb565::BLACK));
        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(0, 0), Size::new(5, 1)))
        );
    }

    #[test]
    fn test_fill_solid_fully_outside_is_ignored() {
        let mut fb = FrameBuffer::new(Size::new(4, 4), Rgb565::BLACK);

        fb.fill_solid(
            &Rectangle::new(Point::new(-10, 0), Size::new(5, 4)),
            Rgb565::RED,
        )
        .unwrap();

        assert_eq!(fb.dirty_area(), None);
    }

    #[test]
    fn test_flush_copies_dirty_region() {
        let mut fb = FrameBuffer::new(Size::new(6, 6), Rgb565::BLACK);
        let mut display = FrameBuffer::new(Size::new(6, 6), Rgb565::BLACK);

        fb.fill_solid(
            &Rectangle::new(Point::new(1, 1), Size::new(2, 2)),
            Rgb565::WHITE,
        )
        .unwrap();
        fb.flush(&mut display).unwrap();

        assert_eq!(display.pixel(Point::new(2, 2)), Some(Rgb565::WHITE));
        assert_eq!(display.pixel(Point::new(3, 3)), Some(Rgb565::BLACK));
        assert_eq!(fb.dirty_area(), None);
    }
}
