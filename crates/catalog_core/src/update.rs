use catalog_logging::{catalog_debug, catalog_error, catalog_info, catalog_warn};

use crate::{AppState, CatalogPage, Criteria, Effect, Msg, RequestId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let criteria = state.query().listing_criteria();
            vec![list_fetch(&mut state, criteria)]
        }
        Msg::SearchSubmitted(raw) => {
            let term = raw.trim();
            let term = (!term.is_empty()).then(|| term.to_string());
            catalog_info!("Search submitted: {:?}", term);
            let criteria = state.query_mut().apply_search(term);
            vec![list_fetch(&mut state, criteria)]
        }
        Msg::FilterChanged { kind, value } => {
            let value = value.trim();
            let category = (!value.is_empty()).then(|| value.to_string());
            catalog_info!("Filter changed: {}={:?}", kind, category);
            let criteria = state.query_mut().apply_filter(category);
            vec![list_fetch(&mut state, criteria)]
        }
        Msg::PageSelected { selected } => page_selected(&mut state, selected),
        Msg::ItemSelected { item_id } => {
            let Some(item) = state.find_item(item_id).cloned() else {
                catalog_warn!("Selected item {} is not in the current result set", item_id);
                return (state, Vec::new());
            };
            catalog_info!("Item selected: {} ({})", item.title, item.id);
            let (request_id, criteria) = state.issue_detail_request(item.clone());
            vec![
                Effect::SelectItem(item),
                Effect::FetchCatalog {
                    request_id,
                    criteria,
                },
            ]
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::CatalogLoaded { request_id, page } => {
            apply_page(&mut state, request_id, page);
            Vec::new()
        }
        Msg::DetailLoaded {
            request_id,
            item,
            categories,
        } => {
            if state.is_current_detail_request(request_id) {
                state.replace_categories(categories);
                state.complete_detail(item);
            } else {
                catalog_debug!("Discarding stale detail response {}", request_id);
            }
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            message,
        } => {
            apply_failure(&mut state, request_id, message);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn list_fetch(state: &mut AppState, criteria: Criteria) -> Effect {
    let request_id = state.issue_list_request();
    catalog_debug!("Issuing list request {}: {:?}", request_id, criteria);
    Effect::FetchCatalog {
        request_id,
        criteria,
    }
}

fn page_selected(state: &mut AppState, selected: usize) -> Vec<Effect> {
    let Some(page_number) = selected
        .checked_add(1)
        .and_then(|page| u32::try_from(page).ok())
    else {
        catalog_warn!("Ignoring out of range page index {}", selected);
        return Vec::new();
    };

    let page_count = state.meta().derived_page_count();
    if page_count > 0 && page_number > page_count {
        catalog_warn!(
            "Ignoring page {} beyond derived page count {}",
            page_number,
            page_count
        );
        return Vec::new();
    }

    catalog_info!("Page changed to {}", page_number);
    match state.query_mut().apply_page(page_number) {
        Some(criteria) => vec![list_fetch(state, criteria)],
        None => Vec::new(),
    }
}

fn apply_page(state: &mut AppState, request_id: RequestId, page: CatalogPage) {
    if !state.is_current_list_request(request_id) {
        catalog_debug!("Discarding stale list response {}", request_id);
        return;
    }
    state.finish_list_request();

    let CatalogPage {
        items,
        categories,
        total_pages,
    } = page;

    match items {
        Some(items) => state.replace_items(items),
        None => {
            catalog_error!("Catalog response {} does not contain results", request_id);
            state.record_diagnostic("response did not contain results");
        }
    }

    state.replace_categories(categories);

    match total_pages {
        Some(total_pages) => {
            let before = state.meta();
            state.meta_mut().apply_total_pages(total_pages);
            let after = state.meta();
            if before != after {
                catalog_debug!(
                    "Derived page count {} from {} remote pages ({} items)",
                    after.derived_page_count(),
                    after.total_remote_pages(),
                    after.derived_total_items()
                );
                state.mark_dirty();
            }
        }
        None => {
            catalog_error!("Catalog response {} does not contain total pages", request_id);
            state.record_diagnostic("response did not contain total pages");
        }
    }
}

fn apply_failure(state: &mut AppState, request_id: RequestId, message: String) {
    if state.is_current_list_request(request_id) {
        catalog_warn!("Catalog request {} failed: {}", request_id, message);
        state.finish_list_request();
        state.record_diagnostic(format!("catalog request failed: {message}"));
    } else if state.is_current_detail_request(request_id) {
        catalog_warn!("Detail request {} failed: {}", request_id, message);
        state.abandon_detail();
        state.record_diagnostic(format!("detail request failed: {message}"));
    } else {
        catalog_debug!("Ignoring failure of stale request {}: {}", request_id, message);
    }
}
