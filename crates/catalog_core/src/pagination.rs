//! Pagination control: a pure function of `(page_count, current_page)`.
//!
//! The control holds no page memory of its own. It is rebuilt from coordinator
//! state on every render and reports clicks as zero-based page indices.

/// Pages always shown at each end of the bar.
pub const MARGIN_PAGES: usize = 4;
/// Pages shown on each side of the selected page.
pub const RANGE_PAGES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
    /// Step back one page; `target` is `None` when disabled.
    Previous {
        label: &'static str,
        target: Option<usize>,
    },
    Page {
        index: usize,
        selected: bool,
    },
    /// Collapsed run of hidden pages.
    Break,
    /// Step forward one page; `target` is `None` when disabled.
    Next {
        label: &'static str,
        target: Option<usize>,
    },
}

impl PageControl {
    /// Zero-based page index emitted when this control is clicked.
    pub fn target(&self) -> Option<usize> {
        match self {
            PageControl::Previous { target, .. } | PageControl::Next { target, .. } => *target,
            PageControl::Page { index, selected } => (!selected).then_some(*index),
            PageControl::Break => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.target().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page_count: u32,
    /// Highlighted page, zero-based. `None` when the coordinator's page lies
    /// past `page_count`, which happens after a response shrinks the count.
    pub selected: Option<usize>,
    pub controls: Vec<PageControl>,
}

impl PaginationView {
    #[cfg(test)]
    fn page_buttons(&self) -> impl Iterator<Item = usize> + '_ {
        self.controls.iter().filter_map(|control| match control {
            PageControl::Page { index, .. } => Some(*index),
            _ => None,
        })
    }
}

/// Builds the pagination bar, or `None` when there is nothing to page through.
///
/// `current_page` is the coordinator's one-based page. Only a page equal to it
/// is highlighted. The visible window is anchored on `current_page` clamped
/// into `[1, page_count]`, and arrows always target pages inside that range.
pub fn build_pagination(page_count: u32, current_page: u32) -> Option<PaginationView> {
    if page_count == 0 {
        return None;
    }
    let current_page = current_page.max(1);
    let count = page_count as usize;
    let anchor = current_page.min(page_count) as usize - 1;
    let selected = (current_page <= page_count).then_some(current_page as usize - 1);

    let has_previous = current_page > 1;
    let has_next = current_page < page_count;

    let mut controls = Vec::with_capacity(2 * (MARGIN_PAGES + RANGE_PAGES) + 5);
    controls.push(PageControl::Previous {
        label: if has_previous { "<" } else { ">" },
        target: has_previous.then(|| (current_page - 1).min(page_count) as usize - 1),
    });

    let mut in_gap = false;
    for index in 0..count {
        let visible = index < MARGIN_PAGES
            || index >= count.saturating_sub(MARGIN_PAGES)
            || index.abs_diff(anchor) <= RANGE_PAGES;
        if visible {
            controls.push(PageControl::Page {
                index,
                selected: selected == Some(index),
            });
            in_gap = false;
        } else if !in_gap {
            controls.push(PageControl::Break);
            in_gap = true;
        }
    }

    controls.push(PageControl::Next {
        label: if has_next { ">" } else { "<" },
        target: has_next.then_some(current_page as usize),
    });

    Some(PaginationView {
        page_count,
        selected,
        controls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pages_renders_nothing() {
        assert_eq!(build_pagination(0, 1), None);
        assert_eq!(build_pagination(0, 7), None);
    }

    #[test]
    fn single_page_has_disabled_arrows() {
        let view = build_pagination(1, 1).unwrap();
        assert_eq!(
            view.controls,
            vec![
                PageControl::Previous {
                    label: ">",
                    target: None
                },
                PageControl::Page {
                    index: 0,
                    selected: true
                },
                PageControl::Next {
                    label: "<",
                    target: None
                },
            ]
        );
    }

    #[test]
    fn long_bar_collapses_gaps_around_window() {
        let view = build_pagination(500, 250).unwrap();
        let pages: Vec<usize> = view.page_buttons().collect();
        let mut expected: Vec<usize> = (0..4).collect();
        expected.extend(245..=253);
        expected.extend(496..500);
        assert_eq!(pages, expected);

        let breaks = view
            .controls
            .iter()
            .filter(|c| matches!(c, PageControl::Break))
            .count();
        assert_eq!(breaks, 2);
        assert_eq!(view.selected, Some(249));
    }

    #[test]
    fn page_past_the_count_is_not_highlighted() {
        let view = build_pagination(2, 5).unwrap();
        assert_eq!(view.selected, None);
        assert_eq!(
            view.controls,
            vec![
                PageControl::Previous {
                    label: "<",
                    target: Some(1)
                },
                PageControl::Page {
                    index: 0,
                    selected: false
                },
                PageControl::Page {
                    index: 1,
                    selected: false
                },
                PageControl::Next {
                    label: "<",
                    target: None
                },
            ]
        );
        assert!(view.controls[1..3].iter().all(PageControl::is_enabled));
    }

    #[test]
    fn window_is_anchored_on_the_last_page_when_past_the_count() {
        let view = build_pagination(30, 80).unwrap();
        let pages: Vec<usize> = view.page_buttons().collect();
        let mut expected: Vec<usize> = (0..4).collect();
        expected.extend(25..30);
        assert_eq!(pages, expected);
        assert_eq!(view.controls.first().and_then(PageControl::target), Some(29));
    }

    #[test]
    fn page_zero_is_treated_as_the_first_page() {
        let view = build_pagination(3, 0).unwrap();
        assert_eq!(view.selected, Some(0));
    }

    #[test]
    fn every_emitted_index_maps_back_to_a_valid_page() {
        for page_count in 1..=30u32 {
            for current in 1..=page_count {
                let view = build_pagination(page_count, current).unwrap();
                assert_eq!(view.selected, Some(current as usize - 1));
                for control in &view.controls {
                    if let Some(target) = control.target() {
                        let next_page = target as u32 + 1;
                        assert!((1..=page_count).contains(&next_page));
                        assert_ne!(next_page, current);
                    }
                }
            }
        }
    }

    #[test]
    fn arrows_follow_position() {
        let first = build_pagination(5, 1).unwrap();
        assert_eq!(first.controls.first().and_then(PageControl::target), None);
        assert_eq!(first.controls.last().and_then(PageControl::target), Some(1));

        let last = build_pagination(5, 5).unwrap();
        assert_eq!(last.controls.first().and_then(PageControl::target), Some(3));
        assert!(!last.controls.last().unwrap().is_enabled());
    }
}
