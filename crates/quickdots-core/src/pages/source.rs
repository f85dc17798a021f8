//! Pager capability consumed by the indicator

use alloc::rc::Rc;
use heapless::Vec;

use crate::error::{DotsError, DotsResult};

/// Listeners each pager keeps per notification kind
pub const MAX_LISTENERS: usize = 4;

/// Callback receiving a page index or an item count.
///
/// Listeners run synchronously inside the pager call that triggered them and
/// their errors propagate back out of that call.
pub type PagerListener = Rc<dyn Fn(usize) -> DotsResult<()>>;

/// What an indicator needs from a paged-content host
pub trait PagerSource {
    /// Number of pages currently provided by the content source
    fn item_count(&self) -> usize;

    /// Subscribe to page changes; the listener receives the new page index
    fn add_on_page_selected_listener(&mut self, listener: PagerListener) -> DotsResult<()>;

    /// Unsubscribe a listener previously added, matched by identity
    fn remove_on_page_selected_listener(&mut self, listener: &PagerListener);

    /// Subscribe to content source swaps; the listener receives the new item count
    fn add_on_source_changed_listener(&mut self, listener: PagerListener) -> DotsResult<()>;

    /// Unsubscribe a listener previously added, matched by identity
    fn remove_on_source_changed_listener(&mut self, listener: &PagerListener);
}

/// Bounded listener list shared by [`PagerSource`] implementations
#[derive(Default)]
pub(crate) struct ListenerList {
    listeners: Vec<PagerListener, MAX_LISTENERS>,
}

impl ListenerList {
    pub(crate) fn add(&mut self, listener: PagerListener) -> DotsResult<()> {
        self.listeners
            .push(listener)
            .map_err(|_| DotsError::ListenerCapacityExceeded { max: MAX_LISTENERS })
    }

    pub(crate) fn remove(&mut self, listener: &PagerListener) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener in subscription order, stopping at the first error
    pub(crate) fn notify(&self, value: usize) -> DotsResult<()> {
        self.listeners.iter().try_for_each(|listener| listener(value))
    }
}
