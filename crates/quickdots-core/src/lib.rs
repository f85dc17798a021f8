//! Hardware-independent core library for quickdots
//!
//! This crate contains the dot page indicator widget, the pager collaborator
//! it can track, the styling primitives both draw with, and an in-memory
//! framebuffer for off-screen rendering.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the demo and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod pages;
pub mod ui;

pub use config::DotsConfig;
pub use error::{DotsError, DotsResult};
pub use pages::{Pager, PagerLink, PagerListener, PagerSource};
pub use ui::components::{Dot, MINIMUM_DOT_COUNT, QuickDots};
