//! Catalog core: pure result-set coordinator, pagination control and view-model helpers.
mod catalog;
mod criteria;
mod effect;
mod meta;
mod msg;
mod pagination;
mod query;
mod selection;
mod state;
mod update;
mod view_model;

pub use catalog::{CatalogPage, Category, Item, RequestId};
pub use criteria::{
    Criteria, SortOrder, LISTING_SORT, PARAM_PAGE, PARAM_SORT_BY, PARAM_WITH_GENRES,
};
pub use effect::Effect;
pub use meta::{derive_page_count, ResultMeta, MAX_PAGE_COUNT, PAGE_SIZE};
pub use msg::Msg;
pub use pagination::{build_pagination, PageControl, PaginationView, MARGIN_PAGES, RANGE_PAGES};
pub use query::QueryState;
pub use selection::{SelectionSink, SharedSelection};
pub use state::{AppState, DetailState};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, ItemRowView};
