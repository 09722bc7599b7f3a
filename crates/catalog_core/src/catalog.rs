/// Monotonic tag attached to every fetch issued by the coordinator.
pub type RequestId = u64;

/// A single catalog entry as displayed in the grid and the detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub rating: Option<f32>,
    pub release_date: Option<String>,
    pub category_ids: Vec<u32>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

impl Item {
    /// Four-digit release year, when the release date carries one.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub label: String,
}

/// Normalized result of a list query.
///
/// `items` and `total_pages` are optional so that a response missing either
/// field can still update the parts it does carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPage {
    pub items: Option<Vec<Item>>,
    pub categories: Vec<Category>,
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_requires_digits() {
        let mut item = Item {
            release_date: Some("1999-03-31".to_string()),
            ..Item::default()
        };
        assert_eq!(item.release_year(), Some("1999"));

        item.release_date = Some("TBA".to_string());
        assert_eq!(item.release_year(), None);

        item.release_date = None;
        assert_eq!(item.release_year(), None);
    }
}
