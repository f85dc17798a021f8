// src/ui/components/mod.rs
//! UI components library

pub mod dots;

pub use dots::{Dot, MINIMUM_DOT_COUNT, QuickDots};
