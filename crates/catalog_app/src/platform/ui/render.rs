use std::fmt::Write;

use catalog_core::{AppViewModel, Category, DetailView, Item, ItemRowView, PageControl, PaginationView};

const RULE: &str = "------------------------------------------------------------";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel, selected: Option<&Item>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", header_line(view));
    let _ = writeln!(out, "{RULE}");

    match &view.detail {
        Some(detail) => render_detail(&mut out, detail),
        None => render_grid(&mut out, &view.rows),
    }

    if view.detail.is_none() {
        if let Some(pagination) = &view.pagination {
            let _ = writeln!(out, "{}", pagination_bar(pagination));
        }
    }
    let _ = writeln!(out, "{}", status_line(view, selected));
    out
}

pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No genres loaded yet.\n".to_string();
    }
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{:>6}  {}", category.id, category.label);
    }
    out
}

fn header_line(view: &AppViewModel) -> String {
    let search = view.search_term.as_deref().unwrap_or("-");
    let genre = view.filter_label().unwrap_or_else(|| "all".to_string());
    let mut line = format!("Search: {search} | Genre: {genre} | Page {}", view.page_number);
    if view.page_count > 0 {
        let _ = write!(line, "/{}", view.page_count);
    }
    if view.loading {
        line.push_str(" | loading...");
    }
    line
}

fn render_grid(out: &mut String, rows: &[ItemRowView]) {
    if rows.is_empty() {
        let _ = writeln!(out, "No results.");
        return;
    }
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, format_row(row));
    }
}

fn format_row(row: &ItemRowView) -> String {
    let mut text = row.title.clone();
    if let Some(year) = &row.year {
        let _ = write!(text, " ({year})");
    }
    if let Some(rating) = row.rating {
        let _ = write!(text, "  * {rating:.1}");
    }
    if !row.categories.is_empty() {
        let _ = write!(text, "  [{}]", row.categories.join(", "));
    }
    text
}

fn render_detail(out: &mut String, detail: &DetailView) {
    let item = &detail.item;
    let _ = writeln!(out, "{}", item.title);
    if let Some(date) = &item.release_date {
        let _ = writeln!(out, "Released: {date}");
    }
    if let Some(rating) = item.rating {
        let _ = writeln!(out, "Rating:   {rating:.1}");
    }
    if !detail.categories.is_empty() {
        let _ = writeln!(out, "Genres:   {}", detail.categories.join(", "));
    }
    if let Some(poster) = &item.poster_path {
        let _ = writeln!(out, "Poster:   {poster}");
    }
    match (&item.overview, detail.loading) {
        (Some(overview), _) => {
            let _ = writeln!(out, "\n{overview}");
        }
        (None, true) => {
            let _ = writeln!(out, "\nLoading details...");
        }
        (None, false) => {}
    }
    let _ = writeln!(out, "\n(type `back` to return to the list)");
}

/// One-line rendering of the pagination control; the highlighted page is bracketed.
pub fn pagination_bar(pagination: &PaginationView) -> String {
    pagination
        .controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { label, .. } | PageControl::Next { label, .. } => {
                if control.is_enabled() {
                    label.to_string()
                } else {
                    format!("({label})")
                }
            }
            PageControl::Page { index, selected } => {
                if *selected {
                    format!("[{}]", index + 1)
                } else {
                    (index + 1).to_string()
                }
            }
            PageControl::Break => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn status_line(view: &AppViewModel, selected: Option<&Item>) -> String {
    let mut parts = vec![format!("{} titles", format_with_commas(view.total_items))];
    if let Some(item) = selected {
        parts.push(format!("Selected: {}", item.title));
    }
    if let Some(diagnostic) = &view.last_diagnostic {
        parts.push(format!("Last problem: {diagnostic}"));
    }
    parts.join(" | ")
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
