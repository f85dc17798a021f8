//! Subscriptions tying an indicator to a pager

use core::cell::RefCell;

use alloc::rc::{Rc, Weak};
use log::info;

use crate::error::{DotsError, DotsResult};
use crate::pages::source::{PagerListener, PagerSource};
use crate::ui::components::QuickDots;
use crate::ui::components::dots::to_dot_value;

/// Live link between a [`QuickDots`] and a [`PagerSource`]
///
/// Holds the two listeners registered on the pager so they can be removed
/// again. Listeners only keep a weak reference to the indicator; once the
/// indicator is dropped they do nothing.
pub struct PagerLink {
    page_selected: PagerListener,
    source_changed: PagerListener,
}

impl PagerLink {
    /// Sync the indicator with the pager's current source, then subscribe
    ///
    /// The sync is committed before either listener is added. If a
    /// subscription fails, the listeners are rolled back but the indicator
    /// keeps the pager's count with the first dot selected.
    pub fn attach<P: PagerSource>(
        indicator: &Rc<RefCell<QuickDots>>,
        pager: &mut P,
    ) -> DotsResult<Self> {
        with_indicator(&Rc::downgrade(indicator), |dots| {
            dots.sync_with_source(pager.item_count())
        })?;

        let weak = Rc::downgrade(indicator);
        let page_selected: PagerListener = Rc::new(move |position: usize| {
            with_indicator(&weak, |dots| dots.set_current_index(to_dot_value(position)))
        });

        let weak = Rc::downgrade(indicator);
        let source_changed: PagerListener = Rc::new(move |item_count: usize| {
            with_indicator(&weak, |dots| dots.sync_with_source(item_count))
        });

        pager.add_on_page_selected_listener(page_selected.clone())?;
        if let Err(e) = pager.add_on_source_changed_listener(source_changed.clone()) {
            pager.remove_on_page_selected_listener(&page_selected);
            return Err(e);
        }

        info!(" Indicator linked to pager ({} pages)", pager.item_count());
        Ok(Self {
            page_selected,
            source_changed,
        })
    }

    /// Remove both listeners; the indicator keeps its last values
    pub fn unlink<P: PagerSource>(self, pager: &mut P) {
        pager.remove_on_page_selected_listener(&self.page_selected);
        pager.remove_on_source_changed_listener(&self.source_changed);
        info!(" Indicator unlinked from pager");
    }
}

fn with_indicator(
    indicator: &Weak<RefCell<QuickDots>>,
    f: impl FnOnce(&mut QuickDots) -> DotsResult<()>,
) -> DotsResult<()> {
    let Some(indicator) = indicator.upgrade() else {
        return Ok(());
    };
    let mut dots = indicator
        .try_borrow_mut()
        .map_err(|_| DotsError::IndicatorBusy)?;
    f(&mut dots)
}
