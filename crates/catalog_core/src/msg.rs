#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Front-end is up; load the first page.
    Started,
    /// User submitted the search box.
    SearchSubmitted(String),
    /// User picked a category. An empty value clears the filter.
    FilterChanged { kind: String, value: String },
    /// User clicked a page control (zero-based).
    PageSelected { selected: usize },
    /// User picked an item in the grid.
    ItemSelected { item_id: u64 },
    /// User left the detail view.
    DetailClosed,
    /// Remote list query completed.
    CatalogLoaded {
        request_id: crate::RequestId,
        page: crate::CatalogPage,
    },
    /// Remote single-item query completed.
    DetailLoaded {
        request_id: crate::RequestId,
        item: crate::Item,
        categories: Vec<crate::Category>,
    },
    /// Any remote query failed.
    FetchFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

impl Msg {
    /// Filter change from a control that reports numeric ids.
    pub fn filter(kind: impl Into<String>, value: impl ToString) -> Self {
        Msg::FilterChanged {
            kind: kind.into(),
            value: value.to_string(),
        }
    }
}
