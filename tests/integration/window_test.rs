//! Invariant sweeps over page window plans.

use pagekit_core::types::{PageLink, PageWindowCalculator};

const MAX_TOTAL_PAGES: u64 = 60;

fn numeric_pages(links: &[PageLink]) -> Vec<u64> {
    links
        .iter()
        .filter(|link| link.is_numeric())
        .filter_map(PageLink::page)
        .collect()
}

fn for_each_plan(max_values: &[u64], mut check: impl FnMut(u64, u64, u64)) {
    for &max in max_values {
        for total in 1..=MAX_TOTAL_PAGES {
            for current in 1..=total {
                check(max, total, current);
            }
        }
    }
}

#[test]
fn test_first_and_last_always_present() {
    for_each_plan(&[5, 6, 7, 9, 11], |max, total, current| {
        let links = PageWindowCalculator::compute(current, total, max).links();
        if total == 1 {
            assert!(links.is_empty());
            return;
        }
        let pages = numeric_pages(&links);
        assert_eq!(pages.first(), Some(&1), "max={max} total={total} current={current}");
        assert_eq!(pages.last(), Some(&total), "max={max} total={total} current={current}");
    });
}

#[test]
fn test_current_page_is_visible_and_active() {
    for_each_plan(&[5, 6, 7, 9, 11], |max, total, current| {
        let plan = PageWindowCalculator::compute(current, total, max);
        assert!(plan.is_page_visible(current));

        let active: Vec<u64> = plan
            .links()
            .iter()
            .filter(|link| link.is_active())
            .filter_map(PageLink::page)
            .collect();
        if total > 1 {
            assert_eq!(active, vec![current], "max={max} total={total} current={current}");
        }
    });
}

#[test]
fn test_all_pages_shown_when_they_fit() {
    for_each_plan(&[5, 7, 9], |max, total, current| {
        if total > max {
            return;
        }
        let plan = PageWindowCalculator::compute(current, total, max);
        assert!(plan.show_all);
        assert!(!plan.left_gap && !plan.right_gap);
        if total > 1 {
            assert_eq!(numeric_pages(&plan.links()), (1..=total).collect::<Vec<_>>());
        }
    });
}

#[test]
fn test_window_is_bounded_when_pages_do_not_fit() {
    for_each_plan(&[5, 6, 7, 8, 9, 11], |max, total, current| {
        if total <= max {
            return;
        }
        let plan = PageWindowCalculator::compute(current, total, max);
        let links = plan.links();
        let pages = numeric_pages(&links);

        assert!(!plan.show_all);
        assert!(plan.window_start >= 2);
        assert!(plan.window_end <= total - 1);
        assert!(pages.windows(2).all(|w| w[0] < w[1]));
        assert!(pages.len() as u64 <= max, "max={max} total={total} current={current}");

        // Slots are numbers plus gap markers; odd controls are always filled exactly.
        if max % 2 == 1 {
            assert_eq!(links.len() as u64 - 2, max, "max={max} total={total} current={current}");
        }
    });
}

#[test]
fn test_gaps_mark_exactly_the_omitted_pages() {
    for_each_plan(&[5, 7, 9, 11], |max, total, current| {
        if total == 1 {
            return;
        }
        let plan = PageWindowCalculator::compute(current, total, max);
        assert_eq!(plan.left_gap, plan.window_start > 2, "max={max} total={total} current={current}");
        assert_eq!(
            plan.right_gap,
            plan.window_end < total - 1,
            "max={max} total={total} current={current}"
        );
    });
}

#[test]
fn test_navigation_disabled_only_at_edges() {
    for_each_plan(&[9], |max, total, current| {
        let links = PageWindowCalculator::compute(current, total, max).links();
        if total == 1 {
            return;
        }
        match (links.first(), links.last()) {
            (
                Some(PageLink::Previous { page: prev, disabled: prev_disabled }),
                Some(PageLink::Next { page: next, disabled: next_disabled }),
            ) => {
                assert_eq!(*prev_disabled, current == 1);
                assert_eq!(*next_disabled, current == total);
                assert_eq!(*prev, current - 1);
                assert_eq!(*next, current + 1);
            }
            other => panic!("unexpected navigation links: {other:?}"),
        }
    });
}
