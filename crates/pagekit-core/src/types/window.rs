//! Page window calculation.
//!
//! Decides which page numbers of a pagination control are shown
//! individually and on which sides an ellipsis marker stands in for the
//! omitted ones. Pages 1 and `total_pages` are always rendered as permanent
//! first/last links, so the window only ever covers `2..=total_pages - 1`.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::link::{GapSide, PageLink};

/// Structured result of a window calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindowPlan {
    /// Total number of pages (at least 1).
    pub total_pages: u64,
    /// Current page, always within `1..=total_pages`.
    pub current_page: u64,
    /// Every middle page fits, no gaps are rendered.
    pub show_all: bool,
    /// First page of the numeric window.
    pub window_start: u64,
    /// Last page of the numeric window. The window is empty when this is below `window_start`.
    pub window_end: u64,
    /// Pages between the first link and the window are omitted.
    pub left_gap: bool,
    /// Pages between the window and the last link are omitted.
    pub right_gap: bool,
}

impl PageWindowPlan {
    /// Pages rendered individually between the first and last links.
    pub fn window_pages(&self) -> RangeInclusive<u64> {
        self.window_start..=self.window_end
    }

    /// Whether the control has anything to navigate.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether `page` is rendered as its own link (first, last, or inside the window).
    pub fn is_page_visible(&self, page: u64) -> bool {
        page == 1 || page == self.total_pages || self.window_pages().contains(&page)
    }

    /// Build the ordered link sequence of the control.
    ///
    /// Returns an empty list for a single page: only the container is rendered then.
    pub fn links(&self) -> Vec<PageLink> {
        if !self.has_multiple_pages() {
            return Vec::new();
        }

        let current = self.current_page;
        let mut links = Vec::with_capacity(self.window_pages().count() + 6);

        links.push(PageLink::Previous {
            page: current.saturating_sub(1),
            disabled: current == 1,
        });
        links.push(PageLink::First {
            active: current == 1,
        });

        if self.left_gap {
            links.push(PageLink::Gap { side: GapSide::Left });
        }

        links.extend(self.window_pages().map(|page| PageLink::Window {
            page,
            active: page == current,
        }));

        if self.right_gap {
            links.push(PageLink::Gap { side: GapSide::Right });
        }

        links.push(PageLink::Last {
            page: self.total_pages,
            active: current == self.total_pages,
        });
        links.push(PageLink::Next {
            page: current.saturating_add(1),
            disabled: current == self.total_pages,
        });

        links
    }
}

/// Largest page count a plan can describe; window arithmetic is signed.
pub const MAX_TOTAL_PAGES: u64 = i64::MAX as u64;

/// Pure calculator for [`PageWindowPlan`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageWindowCalculator;

impl PageWindowCalculator {
    /// Compute the window for `current_page` out of `total_pages`.
    ///
    /// `total_pages` is clamped into `1..=MAX_TOTAL_PAGES`, `current_page`
    /// into `1..=total_pages`, and a `max_pages_to_show` of 0 counts as 1.
    pub fn compute(current_page: u64, total_pages: u64, max_pages_to_show: u64) -> PageWindowPlan {
        let total_pages = total_pages.clamp(1, MAX_TOTAL_PAGES);
        let max_pages_to_show = max_pages_to_show.max(1);
        let clamped = current_page.clamp(1, total_pages);
        if clamped != current_page {
            tracing::debug!(
                requested = current_page,
                clamped,
                total_pages,
                "Current page out of range, clamping"
            );
        }

        let total = to_signed(total_pages);
        let current = to_signed(clamped);
        let span = to_signed((max_pages_to_show - 1) / 2);

        if total_pages <= max_pages_to_show {
            return PageWindowPlan {
                total_pages,
                current_page: clamped,
                show_all: true,
                window_start: 2,
                window_end: total_pages - 1,
                left_gap: false,
                right_gap: false,
            };
        }

        // Default bounds, valid while the current page is away from both edges.
        let mut start = (current - span + 1).max(2);
        let mut end = current.saturating_add(span - 1).min(total - 1);

        // Close to the left edge: give the unused left slots to the right side.
        if current <= span {
            end += span - current + 1;
        }

        // Close to the right edge: give the unused right slots to the left side.
        if current >= total - span {
            start -= span - (total - current);
        }

        let left_gap = current - 1 > span;
        let right_gap = current < total - span;

        // Each gap marker takes one slot away from the window.
        if left_gap {
            start += 1;
        }
        if right_gap {
            end -= 1;
        }

        let plan = PageWindowPlan {
            total_pages,
            current_page: clamped,
            show_all: false,
            window_start: to_unsigned(start),
            window_end: to_unsigned(end),
            left_gap,
            right_gap,
        };
        tracing::trace!(?plan, max_pages_to_show, "Computed page window");
        plan
    }
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_unsigned(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
