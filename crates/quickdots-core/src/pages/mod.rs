//! Paged-content hosts an indicator can follow
//!
//! [`PagerSource`] is the capability an indicator needs from a pager;
//! [`Pager`] is the concrete pager shipped with this crate and
//! [`PagerLink`] owns the subscriptions tying an indicator to one.

pub mod link;
pub mod pager;
pub mod source;

pub use link::PagerLink;
pub use pager::{MAX_PAGES, PageTitle, Pager, SWIPE_THRESHOLD_PX};
pub use source::{MAX_LISTENERS, PagerListener, PagerSource};
