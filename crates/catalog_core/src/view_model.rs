use crate::{Category, DetailState, Item, PaginationView};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub search_term: Option<String>,
    pub category_filter: Option<String>,
    pub page_number: u32,
    pub page_count: u32,
    pub total_items: u64,
    pub rows: Vec<ItemRowView>,
    pub categories: Vec<Category>,
    pub pagination: Option<PaginationView>,
    pub detail: Option<DetailView>,
    pub loading: bool,
    pub last_diagnostic: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    /// Label of the active category filter, falling back to its raw id.
    pub fn filter_label(&self) -> Option<String> {
        let filter = self.category_filter.as_deref()?;
        let label = filter
            .parse::<u32>()
            .ok()
            .and_then(|id| category_label(&self.categories, id))
            .unwrap_or(filter);
        Some(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub item_id: u64,
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<f32>,
    pub categories: Vec<String>,
}

impl ItemRowView {
    pub(crate) fn from_item(item: &Item, categories: &[Category]) -> Self {
        Self {
            item_id: item.id,
            title: item.title.clone(),
            year: item.release_year().map(ToOwned::to_owned),
            rating: item.rating,
            categories: category_labels(item, categories),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub item: Item,
    pub categories: Vec<String>,
    pub loading: bool,
}

impl DetailView {
    pub(crate) fn from_state(detail: &DetailState, categories: &[Category]) -> Self {
        let item = detail.item();
        Self {
            item: item.clone(),
            categories: category_labels(item, categories),
            loading: matches!(detail, DetailState::Loading(_)),
        }
    }
}

fn category_label(categories: &[Category], id: u32) -> Option<&str> {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.label.as_str())
}

// Unknown ids are skipped; the category list may not have arrived yet.
fn category_labels(item: &Item, categories: &[Category]) -> Vec<String> {
    item.category_ids
        .iter()
        .filter_map(|id| category_label(categories, *id))
        .map(ToOwned::to_owned)
        .collect()
}
