use serde::Deserialize;

/// A movie as the remote service returns it, in list results or as a bare
/// detail object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// List results carry bare ids.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Detail objects carry full genre records instead.
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Genre ids regardless of which shape the remote used.
    pub fn category_ids(&self) -> Vec<u32> {
        if !self.genre_ids.is_empty() {
            return self.genre_ids.clone();
        }
        self.genres.iter().map(|genre| genre.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscoverBody {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreListBody {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_body_tolerates_missing_fields() {
        let body: DiscoverBody = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(body.results.is_none());
        assert!(body.total_pages.is_none());
    }

    #[test]
    fn detail_object_genres_become_category_ids() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 603, "title": "The Matrix", "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}], "runtime": 136}"#,
        )
        .unwrap();
        assert_eq!(movie.category_ids(), vec![28, 878]);
        assert_eq!(movie.vote_average, None);
    }

    #[test]
    fn list_result_uses_genre_ids() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 1, "title": "A", "genre_ids": [18], "vote_average": 6.4, "poster_path": null}"#,
        )
        .unwrap();
        assert_eq!(movie.category_ids(), vec![18]);
        assert_eq!(movie.vote_average, Some(6.4));
        assert_eq!(movie.poster_path, None);
    }
}
