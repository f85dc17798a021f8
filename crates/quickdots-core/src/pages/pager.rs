// src/pages/pager.rs
//! Pager with swipe navigation and listener dispatch.

use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use heapless::{String, Vec};
use log::{debug, info};

use crate::error::{DotsError, DotsResult};
use crate::pages::source::{ListenerList, PagerListener, PagerSource};
use crate::ui::core::{TouchEvent, TouchPoint, TouchResult};

/// Maximum pages a [`Pager`] can hold
pub const MAX_PAGES: usize = 16;

/// Horizontal drag distance that turns a press into a page swipe
pub const SWIPE_THRESHOLD_PX: i32 = 40;

/// Page title, truncated to fit
pub type PageTitle = String<32>;

/// In-progress touch gesture
#[derive(Debug, Clone, Copy)]
struct Swipe {
    start_x: i32,
    /// A swipe turns at most one page
    consumed: bool,
}

/// Holds a list of pages, tracks the current one, and notifies listeners when
/// either changes.
pub struct Pager {
    bounds: Rectangle,
    pages: Vec<PageTitle, MAX_PAGES>,
    current_page: usize,
    page_selected_listeners: ListenerList,
    source_changed_listeners: ListenerList,
    swipe: Option<Swipe>,
}

impl Pager {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            pages: Vec::new(),
            current_page: 0,
            page_selected_listeners: ListenerList::default(),
            source_changed_listeners: ListenerList::default(),
            swipe: None,
        }
    }

    /// Replace the content source
    ///
    /// Resets the current page to the first one and notifies source-changed
    /// listeners with the new page count.
    pub fn set_pages(&mut self, titles: &[&str]) -> DotsResult<()> {
        if titles.len() > MAX_PAGES {
            return Err(DotsError::PageCapacityExceeded { max: MAX_PAGES });
        }

        self.pages.clear();
        for title in titles {
            // Length checked above
            self.pages.push(truncate_title(title)).ok();
        }
        self.current_page = 0;
        self.swipe = None;

        info!(" Pager source changed: {} pages", self.pages.len());
        self.source_changed_listeners.notify(self.pages.len())
    }

    /// Move to `index`, clamped to the available pages
    ///
    /// Returns `true` when the current page changed; page-selected listeners
    /// are only notified in that case.
    pub fn select_page(&mut self, index: usize) -> DotsResult<bool> {
        let Some(last) = self.pages.len().checked_sub(1) else {
            return Ok(false);
        };

        let target = index.min(last);
        if target == self.current_page {
            return Ok(false);
        }

        debug!(" Navigating to page {} of {}", target, self.pages.len());
        self.current_page = target;
        self.page_selected_listeners.notify(target)?;
        Ok(true)
    }

    pub fn next_page(&mut self) -> DotsResult<bool> {
        self.select_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> DotsResult<bool> {
        match self.current_page.checked_sub(1) {
            Some(previous) => self.select_page(previous),
            None => Ok(false),
        }
    }

    /// Handle touch events; a leftward swipe shows the next page, a rightward
    /// swipe the previous one.
    pub fn handle_touch(&mut self, event: TouchEvent) -> DotsResult<TouchResult> {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.swipe = Some(Swipe {
                    start_x: point.to_point().x,
                    consumed: false,
                });
                Ok(TouchResult::Handled)
            }
            TouchEvent::Press(_) => {
                self.swipe = None;
                Ok(TouchResult::NotHandled)
            }
            TouchEvent::Drag(point) => {
                let Some(swipe) = self.swipe.as_mut() else {
                    return Ok(TouchResult::NotHandled);
                };
                if swipe.consumed {
                    return Ok(TouchResult::Handled);
                }

                let dx = point.to_point().x - swipe.start_x;
                let changed = if dx <= -SWIPE_THRESHOLD_PX {
                    swipe.consumed = true;
                    self.next_page()?
                } else if dx >= SWIPE_THRESHOLD_PX {
                    swipe.consumed = true;
                    self.previous_page()?
                } else {
                    false
                };

                if changed {
                    Ok(TouchResult::PageChanged(self.current_page))
                } else {
                    Ok(TouchResult::Handled)
                }
            }
        }
    }

    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_title(&self) -> Option<&str> {
        self.pages.get(self.current_page).map(|title| title.as_str())
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

impl PagerSource for Pager {
    fn item_count(&self) -> usize {
        self.pages.len()
    }

    fn add_on_page_selected_listener(&mut self, listener: PagerListener) -> DotsResult<()> {
        self.page_selected_listeners.add(listener)
    }

    fn remove_on_page_selected_listener(&mut self, listener: &PagerListener) {
        self.page_selected_listeners.remove(listener);
    }

    fn add_on_source_changed_listener(&mut self, listener: PagerListener) -> DotsResult<()> {
        self.source_changed_listeners.add(listener)
    }

    fn remove_on_source_changed_listener(&mut self, listener: &PagerListener) {
        self.source_changed_listeners.remove(listener);
    }
}

fn truncate_title(title: &str) -> PageTitle {
    let mut truncated = PageTitle::new();
    for c in title.chars() {
        if truncated.push(c).is_err() {
            break;
        }
    }
    truncated
}
