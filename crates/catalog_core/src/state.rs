use catalog_logging::catalog_debug;

use crate::view_model::{AppViewModel, DetailView, ItemRowView};
use crate::{build_pagination, Category, Criteria, Item, QueryState, RequestId, ResultMeta};

/// Detail view lifecycle. The grid copy of the item is shown while the full
/// record loads.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading(Item),
    Loaded(Item),
}

impl DetailState {
    pub fn item(&self) -> &Item {
        match self {
            DetailState::Loading(item) | DetailState::Loaded(item) => item,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    query: QueryState,
    meta: ResultMeta,
    items: Vec<Item>,
    categories: Vec<Category>,
    detail: Option<DetailState>,
    next_request_id: RequestId,
    latest_list_request: Option<RequestId>,
    latest_detail_request: Option<RequestId>,
    list_in_flight: bool,
    last_diagnostic: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: QueryState::default(),
            meta: ResultMeta::default(),
            items: Vec::new(),
            categories: Vec::new(),
            detail: None,
            next_request_id: 1,
            latest_list_request: None,
            latest_detail_request: None,
            list_in_flight: false,
            last_diagnostic: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn meta(&self) -> ResultMeta {
        self.meta
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn last_diagnostic(&self) -> Option<&str> {
        self.last_diagnostic.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.query.search_term().map(ToOwned::to_owned),
            category_filter: self.query.category_filter().map(ToOwned::to_owned),
            page_number: self.query.page_number(),
            page_count: self.meta.derived_page_count(),
            total_items: self.meta.derived_total_items(),
            rows: self
                .items
                .iter()
                .map(|item| ItemRowView::from_item(item, &self.categories))
                .collect(),
            categories: self.categories.clone(),
            pagination: build_pagination(self.meta.derived_page_count(), self.query.page_number()),
            detail: self
                .detail
                .as_ref()
                .map(|detail| DetailView::from_state(detail, &self.categories)),
            loading: self.list_in_flight,
            last_diagnostic: self.last_diagnostic.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    pub(crate) fn meta_mut(&mut self) -> &mut ResultMeta {
        &mut self.meta
    }

    fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Tags a list query; any older list response in flight becomes stale.
    pub(crate) fn issue_list_request(&mut self) -> RequestId {
        let id = self.allocate_request_id();
        self.latest_list_request = Some(id);
        self.list_in_flight = true;
        self.dirty = true;
        id
    }

    pub(crate) fn issue_detail_request(&mut self, item: Item) -> (RequestId, Criteria) {
        let id = self.allocate_request_id();
        let criteria = Criteria::for_item(item.id);
        self.latest_detail_request = Some(id);
        self.detail = Some(DetailState::Loading(item));
        self.dirty = true;
        (id, criteria)
    }

    pub(crate) fn is_current_list_request(&self, request_id: RequestId) -> bool {
        self.latest_list_request == Some(request_id)
    }

    pub(crate) fn is_current_detail_request(&self, request_id: RequestId) -> bool {
        self.detail.is_some() && self.latest_detail_request == Some(request_id)
    }

    pub(crate) fn finish_list_request(&mut self) {
        self.list_in_flight = false;
        self.dirty = true;
    }

    pub(crate) fn find_item(&self, item_id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Item>) {
        catalog_debug!("Replacing {} displayed items with {}", self.items.len(), items.len());
        self.items = items;
        self.dirty = true;
    }

    pub(crate) fn replace_categories(&mut self, categories: Vec<Category>) {
        if self.categories != categories {
            self.categories = categories;
            self.dirty = true;
        }
    }

    pub(crate) fn complete_detail(&mut self, item: Item) {
        self.detail = Some(DetailState::Loaded(item));
        self.dirty = true;
    }

    /// Stops the loading indicator and keeps showing the grid copy.
    pub(crate) fn abandon_detail(&mut self) {
        if let Some(DetailState::Loading(item)) = self.detail.take() {
            self.detail = Some(DetailState::Loaded(item));
        }
        self.latest_detail_request = None;
        self.dirty = true;
    }

    pub(crate) fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.dirty = true;
        }
        self.latest_detail_request = None;
    }

    pub(crate) fn record_diagnostic(&mut self, message: impl Into<String>) {
        self.last_diagnostic = Some(message.into());
        self.dirty = true;
    }
}
