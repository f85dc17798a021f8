// src/ui/components/dots.rs
//! Dot page indicator component
//!
//! [`QuickDots`] draws a single left-aligned row of filled circles, one per
//! page, with the dot at [`QuickDots::current_index`] in the selected color.
//!
//! Every setter validates before it commits, so a rejected value leaves the
//! indicator exactly as it was. Successful setters raise the re-layout and/or
//! redraw flags the host polls through [`QuickDots::is_layout_requested`] and
//! [`Drawable::is_dirty`].
//!
//! # Geometry
//!
//! Dot `i` is centered at
//! `(radius + i * (separation + 2 * radius), radius)` relative to the
//! indicator's origin. Padding grows the measured size but does not move the
//! dots.

use core::cell::RefCell;

use alloc::rc::Rc;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use log::debug;

use crate::config::DotsConfig;
use crate::error::{DotsError, DotsResult};
use crate::pages::{PagerLink, PagerSource};
use crate::ui::core::{Drawable, MeasureSpec};
use crate::ui::styling::{Padding, Theme};

/// Smallest number of dots an indicator can show
pub const MINIMUM_DOT_COUNT: i32 = 1;
const DEFAULT_COUNT: i32 = MINIMUM_DOT_COUNT;
const DEFAULT_CURRENT_DOT: i32 = 0;

/// One circle the indicator paints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: i32,
    /// Center relative to the indicator origin
    pub center: Point,
    pub radius: u32,
    pub color: Rgb565,
    pub selected: bool,
}

/// Row of dots marking the current position within a paged view
pub struct QuickDots {
    count: i32,
    selected_color: Rgb565,
    unselected_color: Rgb565,
    dot_radius: i32,
    dot_separation: i32,
    current_index: i32,
    selected_style: PrimitiveStyle<Rgb565>,
    unselected_style: PrimitiveStyle<Rgb565>,
    padding: Padding,
    origin: Point,
    measured_size: Size,
    layout_requested: bool,
    dirty: bool,
}

impl Default for QuickDots {
    fn default() -> Self {
        let theme = Theme::default();
        Self::from_parts(
            DEFAULT_COUNT,
            theme.selected_dot_color(),
            theme.unselected_dot_color(),
            theme.dot_radius(),
            theme.dot_separation(),
            DEFAULT_CURRENT_DOT,
        )
    }
}

impl QuickDots {
    /// Build an indicator from `config`, falling back to `theme` for every
    /// unset field.
    ///
    /// The resolved values are checked against every invariant, including the
    /// current dot bound, before the indicator is returned.
    pub fn new(config: &DotsConfig, theme: &Theme) -> DotsResult<Self> {
        let count = config.count.unwrap_or(DEFAULT_COUNT);
        let dot_radius = config.dot_radius.unwrap_or_else(|| theme.dot_radius());
        let dot_separation = config
            .dot_separation
            .unwrap_or_else(|| theme.dot_separation());
        let current_index = config.current_dot.unwrap_or(DEFAULT_CURRENT_DOT);

        check_count(count)?;
        check_radius(dot_radius)?;
        check_separation(dot_separation)?;
        check_index(current_index, count)?;

        let dots = Self::from_parts(
            count,
            config
                .selected_color()
                .unwrap_or_else(|| theme.selected_dot_color()),
            config
                .unselected_color()
                .unwrap_or_else(|| theme.unselected_dot_color()),
            dot_radius,
            dot_separation,
            current_index,
        );
        debug!(
            " Created indicator: count={}, radius={}, separation={}, current={}",
            count, dot_radius, dot_separation, current_index
        );
        Ok(dots)
    }

    fn from_parts(
        count: i32,
        selected_color: Rgb565,
        unselected_color: Rgb565,
        dot_radius: i32,
        dot_separation: i32,
        current_index: i32,
    ) -> Self {
        Self {
            count,
            selected_color,
            unselected_color,
            dot_radius,
            dot_separation,
            current_index,
            selected_style: PrimitiveStyle::with_fill(selected_color),
            unselected_style: PrimitiveStyle::with_fill(unselected_color),
            padding: Padding::default(),
            origin: Point::zero(),
            measured_size: Size::zero(),
            layout_requested: true,
            dirty: true,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Link a pager so count and current dot follow it automatically.
    ///
    /// Adopts the pager's item count, selects the first dot, then subscribes
    /// to page-selected and source-changed notifications. The count and dot
    /// are adopted even when a subscription then fails.
    pub fn link_pager<P: PagerSource>(
        indicator: &Rc<RefCell<Self>>,
        pager: &mut P,
    ) -> DotsResult<PagerLink> {
        PagerLink::attach(indicator, pager)
    }

    /// Adopt a new content source: take its item count and select the first dot
    pub(crate) fn sync_with_source(&mut self, item_count: usize) -> DotsResult<()> {
        self.set_count(to_dot_value(item_count))?;
        self.set_current_index(0)
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Set the total number of dots (at least [`MINIMUM_DOT_COUNT`])
    ///
    /// The current dot is not adjusted; select a new one if it falls outside
    /// the new count.
    pub fn set_count(&mut self, count: i32) -> DotsResult<()> {
        check_count(count)?;
        self.count = count;
        debug!(" Dot count set to {}", count);
        self.request_layout();
        self.invalidate();
        Ok(())
    }

    pub fn set_selected_color(&mut self, color: Rgb565) {
        self.selected_color = color;
        self.selected_style = PrimitiveStyle::with_fill(color);
        self.invalidate();
    }

    pub fn set_unselected_color(&mut self, color: Rgb565) {
        self.unselected_color = color;
        self.unselected_style = PrimitiveStyle::with_fill(color);
        self.invalidate();
    }

    /// Set the dot radius in pixels
    pub fn set_dot_radius(&mut self, radius: i32) -> DotsResult<()> {
        check_radius(radius)?;
        self.dot_radius = radius;
        self.request_layout();
        self.invalidate();
        Ok(())
    }

    /// Set the gap between adjacent dot edges in pixels
    pub fn set_dot_separation(&mut self, separation: i32) -> DotsResult<()> {
        check_separation(separation)?;
        self.dot_separation = separation;
        self.request_layout();
        self.invalidate();
        Ok(())
    }

    /// Select the dot at `index`, checked against the count in effect now
    pub fn set_current_index(&mut self, index: i32) -> DotsResult<()> {
        check_index(index, self.count)?;
        self.current_index = index;
        debug!(" Current dot set to {}", index);
        self.invalidate();
        Ok(())
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.request_layout();
        self.invalidate();
    }

    /// Place the indicator on the display; the host calls this after layout
    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.invalidate();
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn selected_color(&self) -> Rgb565 {
        self.selected_color
    }

    pub fn unselected_color(&self) -> Rgb565 {
        self.unselected_color
    }

    pub fn dot_radius(&self) -> i32 {
        self.dot_radius
    }

    pub fn dot_separation(&self) -> i32 {
        self.dot_separation
    }

    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Size reported by the last [`QuickDots::measure`]
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// Whether geometry changed since the last [`QuickDots::measure`]
    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    /// Center of dot `index` relative to the indicator origin
    pub fn dot_center(&self, index: i32) -> Point {
        let step = self
            .dot_separation
            .saturating_add(self.dot_radius.saturating_mul(2));
        Point::new(
            self.dot_radius.saturating_add(index.saturating_mul(step)),
            self.dot_radius,
        )
    }

    /// Size the dots need, padding included, before host constraints apply
    pub fn desired_size(&self) -> Size {
        let diameter = self.dot_radius.unsigned_abs().saturating_mul(2);
        let gaps = self.count.saturating_sub(1).unsigned_abs();
        let dots_width = self
            .count
            .unsigned_abs()
            .saturating_mul(diameter)
            .saturating_add(gaps.saturating_mul(self.dot_separation.unsigned_abs()));

        Size::new(
            self.padding.horizontal().saturating_add(dots_width),
            self.padding.vertical().saturating_add(diameter),
        )
    }

    /// Resolve the desired size against the host's constraints and remember it
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let desired = self.desired_size();
        let size = Size::new(width.resolve(desired.width), height.resolve(desired.height));

        if size != self.measured_size {
            debug!(" Measured indicator: {}x{}", size.width, size.height);
        }
        self.measured_size = size;
        self.layout_requested = false;
        size
    }

    /// Circles in paint order, one per index
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        let radius = self.dot_radius.unsigned_abs();
        (0..self.count).map(move |index| {
            let selected = index == self.current_index;
            Dot {
                index,
                center: self.dot_center(index),
                radius,
                color: if selected {
                    self.selected_color
                } else {
                    self.unselected_color
                },
                selected,
            }
        })
    }

    fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }
}

impl Drawable for QuickDots {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        for dot in self.dots() {
            let style = if dot.selected {
                self.selected_style
            } else {
                self.unselected_style
            };

            Circle::with_center(self.origin + dot.center, dot.radius.saturating_mul(2))
                .into_styled(style)
                .draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, self.measured_size)
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn check_count(count: i32) -> DotsResult<()> {
    if count < MINIMUM_DOT_COUNT {
        return Err(DotsError::InvalidCount {
            count,
            minimum: MINIMUM_DOT_COUNT,
        });
    }
    Ok(())
}

fn check_radius(radius: i32) -> DotsResult<()> {
    if radius < 0 {
        return Err(DotsError::InvalidRadius { radius });
    }
    Ok(())
}

fn check_separation(separation: i32) -> DotsResult<()> {
    if separation < 0 {
        return Err(DotsError::InvalidSeparation { separation });
    }
    Ok(())
}

fn check_index(index: i32, count: i32) -> DotsResult<()> {
    if index < 0 || index >= count {
        return Err(DotsError::IndexOutOfBounds { index, count });
    }
    Ok(())
}

/// Pager positions and counts are `usize`; dots use host-style `i32`
pub(crate) fn to_dot_value(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use alloc::vec::Vec;

    fn dots_with(count: i32, radius: i32, separation: i32) -> QuickDots {
        let config = DotsConfig::new()
            .with_count(count)
            .with_dot_radius(radius)
            .with_dot_separation(separation);
        QuickDots::new(&config, &Theme::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let theme = Theme::default();
        let dots = QuickDots::default();

        assert_eq!(dots.count(), 1);
        assert_eq!(dots.current_index(), 0);
        assert_eq!(dots.dot_radius(), theme.dot_radius());
        assert_eq!(dots.dot_separation(), theme.dot_separation());
        assert_eq!(dots.selected_color(), theme.selected_dot_color());
        assert_eq!(dots.unselected_color(), theme.unselected_dot_color());
    }

    #[test]
    fn test_config_overrides_theme() {
        let config = DotsConfig::new()
            .with_count(3)
            .with_selected_dot_color(Rgb565::RED)
            .with_dot_radius(7)
            .with_current_dot(2);
        let dots = QuickDots::new(&config, &Theme::light()).unwrap();

        assert_eq!(dots.count(), 3);
        assert_eq!(dots.selected_color(), Rgb565::RED);
        assert_eq!(dots.unselected_color(), Theme::light().unselected_dot_color());
        assert_eq!(dots.dot_radius(), 7);
        assert_eq!(dots.dot_separation(), Theme::light().dot_separation());
        assert_eq!(dots.current_index(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let theme = Theme::default();

        let result = QuickDots::new(&DotsConfig::new().with_count(0), &theme);
        assert!(matches!(
            result,
            Err(DotsError::InvalidCount {
                count: 0,
                minimum: 1
            })
        ));

        let result = QuickDots::new(&DotsConfig::new().with_dot_radius(-1), &theme);
        assert!(matches!(result, Err(DotsError::InvalidRadius { radius: -1 })));

        let result = QuickDots::new(&DotsConfig::new().with_dot_separation(-3), &theme);
        assert!(matches!(
            result,
            Err(DotsError::InvalidSeparation { separation: -3 })
        ));

        let config = DotsConfig::new().with_count(2).with_current_dot(2);
        let result = QuickDots::new(&config, &theme);
        assert!(matches!(
            result,
            Err(DotsError::IndexOutOfBounds { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_count_and_index_scenario() {
        let mut dots = QuickDots::default();
        assert_eq!(dots.count(), 1);
        assert_eq!(dots.current_index(), 0);

        dots.set_count(4).unwrap();
        assert_eq!(dots.count(), 4);

        dots.set_current_index(3).unwrap();
        assert_eq!(dots.current_index(), 3);

        let err = dots.set_current_index(4).unwrap_err();
        assert!(matches!(err, DotsError::IndexOutOfBounds { index: 4, count: 4 }));
        assert_eq!(
            alloc::format!("{}", err),
            "You selected a position that is out of the current bounds (selected: 4, bounds: [0, 4))"
        );
        assert_eq!(dots.current_index(), 3);
    }

    #[test]
    fn test_failed_setters_leave_state_unchanged() {
        let mut dots = dots_with(3, 5, 2);

        assert!(matches!(
            dots.set_count(0),
            Err(DotsError::InvalidCount { count: 0, .. })
        ));
        assert!(dots.set_dot_radius(-1).is_err());
        assert!(dots.set_dot_separation(-1).is_err());
        assert!(dots.set_current_index(-1).is_err());

        assert_eq!(dots.count(), 3);
        assert_eq!(dots.dot_radius(), 5);
        assert_eq!(dots.dot_separation(), 2);
        assert_eq!(dots.current_index(), 0);
    }

    #[test]
    fn test_index_checked_against_current_count() {
        let mut dots = dots_with(4, 2, 2);
        dots.set_current_index(3).unwrap();

        // Shrinking the count leaves the selection alone
        dots.set_count(1).unwrap();
        assert_eq!(dots.current_index(), 3);

        assert!(matches!(
            dots.set_current_index(1),
            Err(DotsError::IndexOutOfBounds { index: 1, count: 1 })
        ));
        dots.set_current_index(0).unwrap();
        assert_eq!(dots.current_index(), 0);
    }

    #[test]
    fn test_setters_signal_host() {
        let mut dots = dots_with(2, 4, 4);
        dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        dots.mark_clean();

        dots.set_selected_color(Rgb565::RED);
        assert!(dots.is_dirty());
        assert!(!dots.is_layout_requested());
        dots.mark_clean();

        dots.set_current_index(1).unwrap();
        assert!(dots.is_dirty());
        assert!(!dots.is_layout_requested());
        dots.mark_clean();

        dots.set_dot_radius(6).unwrap();
        assert!(dots.is_dirty());
        assert!(dots.is_layout_requested());
        dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        dots.mark_clean();

        dots.set_dot_separation(1).unwrap();
        assert!(dots.is_layout_requested());
        dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        dots.mark_clean();

        dots.set_count(5).unwrap();
        assert!(dots.is_dirty());
        assert!(dots.is_layout_requested());
    }

    #[test]
    fn test_rejected_setter_does_not_signal() {
        let mut dots = dots_with(2, 4, 4);
        dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        dots.mark_clean();

        assert!(dots.set_count(-2).is_err());
        assert!(!dots.is_dirty());
        assert!(!dots.is_layout_requested());
    }

    #[test]
    fn test_repeated_selection_redraws_each_time() {
        let mut dots = dots_with(3, 4, 4);
        dots.mark_clean();

        dots.set_current_index(2).unwrap();
        assert!(dots.is_dirty());
        dots.mark_clean();

        dots.set_current_index(2).unwrap();
        assert!(dots.is_dirty());
        assert_eq!(dots.current_index(), 2);
    }

    #[test]
    fn test_unbounded_measure() {
        for count in 1..=6 {
            let mut dots = dots_with(count, 3, 5).with_padding(Padding::new(1, 2, 3, 4));
            let size = dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

            let count = count as u32;
            assert_eq!(size.width, 6 + 2 * 3 * count + 5 * (count - 1));
            assert_eq!(size.height, 4 + 2 * 3);
            assert_eq!(dots.measured_size(), size);
        }
    }

    #[test]
    fn test_constrained_measure() {
        // Desired: 4 dots of radius 4, separation 8 -> 32 + 24 = 56 x 8
        let mut dots = dots_with(4, 4, 8);

        let size = dots.measure(MeasureSpec::AtMost(40), MeasureSpec::AtMost(100));
        assert_eq!(size, Size::new(40, 8));

        let size = dots.measure(MeasureSpec::Exactly(100), MeasureSpec::Exactly(20));
        assert_eq!(size, Size::new(100, 20));
        assert!(!dots.is_layout_requested());
    }

    #[test]
    fn test_dot_geometry() {
        let mut dots = dots_with(3, 5, 4);
        dots.set_current_index(1).unwrap();

        let painted: Vec<Dot> = dots.dots().collect();
        assert_eq!(painted.len(), 3);

        for (i, dot) in painted.iter().enumerate() {
            let i = i as i32;
            assert_eq!(dot.index, i);
            assert_eq!(dot.center, Point::new(5 + i * (4 + 10), 5));
            assert_eq!(dot.radius, 5);
            assert_eq!(dot.selected, i == 1);
            let expected = if i == 1 {
                dots.selected_color()
            } else {
                dots.unselected_color()
            };
            assert_eq!(dot.color, expected);
        }
    }

    #[test]
    fn test_draw_paints_each_dot() {
        let mut dots = dots_with(4, 4, 6).with_origin(Point::new(10, 20));
        dots.set_current_index(2).unwrap();
        dots.set_selected_color(Rgb565::RED);
        dots.set_unselected_color(Rgb565::BLUE);

        let mut fb = FrameBuffer::new(Size::new(80, 40), Rgb565::BLACK);
        dots.draw(&mut fb).unwrap();

        for dot in dots.dots() {
            let center = dots.origin() + dot.center;
            let expected = if dot.index == 2 {
                Rgb565::RED
            } else {
                Rgb565::BLUE
            };
            assert_eq!(fb.pixel(center), Some(expected));
        }

        // Gap between the first two dots stays empty
        assert_eq!(fb.pixel(Point::new(10 + 8 + 3, 24)), Some(Rgb565::BLACK));
        // Nothing above the origin row
        assert_eq!(fb.pixel(Point::new(14, 19)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_dot_left_of_buffer_is_clipped() {
        // Radius 4 centered at x = -2 covers x in [-6, 2)
        let mut dots = dots_with(1, 4, 0).with_origin(Point::new(-6, 0));
        dots.set_selected_color(Rgb565::RED);
        let mut fb = FrameBuffer::new(Size::new(12, 8), Rgb565::BLACK);

        dots.draw(&mut fb).unwrap();

        for y in 0..8 {
            for x in 2..12 {
                assert_eq!(fb.pixel(Point::new(x, y)), Some(Rgb565::BLACK));
            }
        }
        assert_eq!(fb.pixel(Point::new(0, 4)), Some(Rgb565::RED));
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let dots = dots_with(3, 0, 2);
        let mut fb = FrameBuffer::new(Size::new(16, 16), Rgb565::BLACK);

        dots.draw(&mut fb).unwrap();
        assert_eq!(fb.take_dirty_area(), None);
    }

    #[test]
    fn test_bounds_follow_origin_and_measure() {
        let mut dots = dots_with(2, 2, 2);
        dots.set_origin(Point::new(3, 4));
        dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        assert_eq!(
            dots.bounds(),
            Rectangle::new(Point::new(3, 4), Size::new(10, 4))
        );
    }
}
