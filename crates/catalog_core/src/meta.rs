/// Fixed page size of the remote service.
pub const PAGE_SIZE: u32 = 20;

/// Deepest page the remote service will serve.
pub const MAX_PAGE_COUNT: u32 = 500;

/// Local pagination depth for a remote `total_pages` value.
///
/// This is the only place the arithmetic lives; every trigger that needs a
/// page count goes through it.
pub fn derive_page_count(total_remote_pages: u32) -> u32 {
    total_remote_pages.div_ceil(PAGE_SIZE).min(MAX_PAGE_COUNT)
}

/// Counts derived from the last response that carried `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultMeta {
    total_remote_pages: u32,
    derived_page_count: u32,
    derived_total_items: u64,
}

impl ResultMeta {
    pub fn total_remote_pages(&self) -> u32 {
        self.total_remote_pages
    }

    pub fn derived_page_count(&self) -> u32 {
        self.derived_page_count
    }

    pub fn derived_total_items(&self) -> u64 {
        self.derived_total_items
    }

    /// Recomputes everything from a response's `total_pages`.
    ///
    /// The page count is derived once from the response and again from the
    /// total item count whenever that changes. Both paths use
    /// [`derive_page_count`] and land on the same value.
    pub(crate) fn apply_total_pages(&mut self, total_remote_pages: u32) {
        self.total_remote_pages = total_remote_pages;
        self.derived_page_count = derive_page_count(total_remote_pages);

        let total_items = u64::from(total_remote_pages) * u64::from(PAGE_SIZE);
        if total_items != self.derived_total_items {
            self.derived_total_items = total_items;
            self.recompute_from_total_items();
        }
    }

    fn recompute_from_total_items(&mut self) {
        let remote_pages = self.derived_total_items / u64::from(PAGE_SIZE);
        let remote_pages = u32::try_from(remote_pages).unwrap_or(u32::MAX);
        self.derived_page_count = derive_page_count(remote_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_matches_ceil_and_cap() {
        for total in [0u32, 1, 19, 20, 21, 39, 40, 41, 9_999, 10_000, 10_001, 12_000, u32::MAX] {
            let expected = ((u64::from(total) + 19) / 20).min(500) as u32;
            assert_eq!(derive_page_count(total), expected, "total_pages={total}");
        }
    }

    #[test]
    fn both_recomputation_paths_agree() {
        let mut meta = ResultMeta::default();
        for total in [10u32, 0, 12_000, 41, 41, 500] {
            meta.apply_total_pages(total);
            assert_eq!(meta.derived_page_count(), derive_page_count(total));
            assert_eq!(meta.derived_total_items(), u64::from(total) * 20);
            assert_eq!(meta.total_remote_pages(), total);
        }
    }
}
