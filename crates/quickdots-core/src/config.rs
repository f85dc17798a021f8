//! Construction-time configuration for [`QuickDots`](crate::ui::components::QuickDots)
//!
//! Every field is optional; unset fields fall back to the defaults of the
//! [`Theme`](crate::ui::styling::Theme) the indicator is built with. Colors are
//! stored as raw RGB565 words so a config blob stays a plain value.

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use serde::{Deserialize, Serialize};

use crate::error::{DotsError, DotsResult};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DotsConfig {
    pub count: Option<i32>,
    pub selected_dot_color: Option<u16>,
    pub unselected_dot_color: Option<u16>,
    pub dot_radius: Option<i32>,
    pub dot_separation: Option<i32>,
    pub current_dot: Option<i32>,
}

impl DotsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_selected_dot_color(mut self, color: Rgb565) -> Self {
        self.selected_dot_color = Some(color.into_storage());
        self
    }

    pub fn with_unselected_dot_color(mut self, color: Rgb565) -> Self {
        self.unselected_dot_color = Some(color.into_storage());
        self
    }

    pub fn with_dot_radius(mut self, radius: i32) -> Self {
        self.dot_radius = Some(radius);
        self
    }

    pub fn with_dot_separation(mut self, separation: i32) -> Self {
        self.dot_separation = Some(separation);
        self
    }

    pub fn with_current_dot(mut self, index: i32) -> Self {
        self.current_dot = Some(index);
        self
    }

    pub fn selected_color(&self) -> Option<Rgb565> {
        self.selected_dot_color.map(raw_to_color)
    }

    pub fn unselected_color(&self) -> Option<Rgb565> {
        self.unselected_dot_color.map(raw_to_color)
    }

    /// Decode a config previously written with [`DotsConfig::to_vec`].
    ///
    /// Only the encoding is checked here; invariants are enforced when the
    /// indicator is constructed.
    pub fn from_bytes(bytes: &[u8]) -> DotsResult<Self> {
        postcard::from_bytes(bytes).map_err(DotsError::InvalidConfig)
    }

    /// Encode this config in postcard wire format.
    pub fn to_vec(&self) -> DotsResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(DotsError::InvalidConfig)
    }
}

fn raw_to_color(raw: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(raw))
}
