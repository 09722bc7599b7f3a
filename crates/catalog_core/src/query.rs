use crate::Criteria;

/// What the user asked to see: the single source of truth for fetching.
///
/// Each transition has one entry point, and each entry point returns the
/// criteria of the fetch it triggers:
///
/// | transition | search_term | category_filter | page_number | fetch criteria          |
/// |------------|-------------|-----------------|-------------|-------------------------|
/// | search     | set         | kept            | kept        | search term only        |
/// | filter     | kept        | set             | kept        | page + filter           |
/// | page       | kept        | kept            | set         | page + filter (if moved)|
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: Option<String>,
    category_filter: Option<String>,
    page_number: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: None,
            category_filter: None,
            page_number: 1,
        }
    }
}

impl QueryState {
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Criteria for the page/filter listing the current state describes.
    pub fn listing_criteria(&self) -> Criteria {
        Criteria::for_listing(self.page_number, self.category_filter())
    }

    pub(crate) fn apply_search(&mut self, term: Option<String>) -> Criteria {
        self.search_term = term;
        Criteria::for_search(self.search_term.clone())
    }

    pub(crate) fn apply_filter(&mut self, category: Option<String>) -> Criteria {
        self.category_filter = category;
        self.listing_criteria()
    }

    /// Returns `None` when the page did not move; nothing needs refetching.
    pub(crate) fn apply_page(&mut self, page_number: u32) -> Option<Criteria> {
        let page_number = page_number.max(1);
        if page_number == self.page_number {
            return None;
        }
        self.page_number = page_number;
        Some(self.listing_criteria())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_filter_and_page() {
        let mut query = QueryState::default();
        query.apply_filter(Some("28".to_string()));
        query.apply_page(4);

        let criteria = query.apply_search(Some("heat".to_string()));

        assert_eq!(query.search_term(), Some("heat"));
        assert_eq!(query.category_filter(), Some("28"));
        assert_eq!(query.page_number(), 4);
        assert_eq!(criteria, Criteria::for_search(Some("heat".to_string())));
    }

    #[test]
    fn filter_keeps_page_and_drops_search_from_criteria() {
        let mut query = QueryState::default();
        query.apply_search(Some("heat".to_string()));
        query.apply_page(2);

        let criteria = query.apply_filter(Some("18".to_string()));

        assert_eq!(query.page_number(), 2);
        assert_eq!(query.search_term(), Some("heat"));
        assert_eq!(criteria, Criteria::for_listing(2, Some("18")));
    }

    #[test]
    fn unchanged_page_needs_no_fetch() {
        let mut query = QueryState::default();
        assert_eq!(query.apply_page(1), None);
        assert_eq!(query.apply_page(0), None);
        assert_eq!(query.apply_page(2), Some(Criteria::for_listing(2, None)));
        assert_eq!(query.apply_page(2), None);
    }
}
