use std::collections::BTreeMap;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT_BY: &str = "sort_by";
pub const PARAM_WITH_GENRES: &str = "with_genres";

/// Sort directive used by every page or filter driven listing.
pub const LISTING_SORT: &str = "popularity.desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Parameter bundle for one query against the remote catalog.
///
/// `params` are merged last by the client, so they win over anything derived
/// from `search_term` or `sort`. When `item_id` is set everything else is
/// ignored and a single-item lookup is performed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub search_term: Option<String>,
    pub sort: Option<SortOrder>,
    pub item_id: Option<u64>,
    pub params: BTreeMap<String, String>,
}

impl Criteria {
    /// Unfiltered, unpaged query for a search term.
    pub fn for_search(term: Option<String>) -> Self {
        Self {
            search_term: term,
            ..Self::default()
        }
    }

    /// Page and filter driven listing, sorted by descending popularity.
    pub fn for_listing(page: u32, category: Option<&str>) -> Self {
        let mut params = BTreeMap::new();
        params.insert(PARAM_PAGE.to_string(), page.to_string());
        params.insert(PARAM_SORT_BY.to_string(), LISTING_SORT.to_string());
        if let Some(category) = category {
            params.insert(PARAM_WITH_GENRES.to_string(), category.to_string());
        }
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn for_item(item_id: u64) -> Self {
        Self {
            item_id: Some(item_id),
            ..Self::default()
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn page(&self) -> Option<u32> {
        self.param(PARAM_PAGE).and_then(|page| page.parse().ok())
    }

    pub fn is_single_item(&self) -> bool {
        self.item_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_criteria_carry_page_sort_and_optional_genre() {
        let criteria = Criteria::for_listing(3, None);
        assert_eq!(criteria.page(), Some(3));
        assert_eq!(criteria.param(PARAM_SORT_BY), Some("popularity.desc"));
        assert_eq!(criteria.param(PARAM_WITH_GENRES), None);
        assert_eq!(criteria.search_term, None);
        assert_eq!(criteria.sort, None);

        let filtered = Criteria::for_listing(1, Some("28"));
        assert_eq!(filtered.param(PARAM_WITH_GENRES), Some("28"));
    }

    #[test]
    fn search_criteria_drop_page_and_filter() {
        let criteria = Criteria::for_search(Some("alien".to_string()));
        assert_eq!(criteria.search_term.as_deref(), Some("alien"));
        assert!(criteria.params.is_empty());
        assert!(!criteria.is_single_item());
    }
}
