#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One query against the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogRequest {
    pub search_term: Option<String>,
    pub sort: Option<SortDirection>,
    /// Switches to a single-item lookup; everything else is then ignored.
    pub item_id: Option<u64>,
    /// Merged last; a key here overrides the derived parameter of the same name.
    pub extra_params: Vec<(String, String)>,
}

impl CatalogRequest {
    /// Query parameters of a list query, excluding the credential.
    pub(crate) fn list_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2 + self.extra_params.len());
        if let Some(term) = &self.search_term {
            params.push(("query".to_string(), term.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort_by".to_string(), format!("popularity.{}", sort.as_str())));
        }
        for (key, value) in &self.extra_params {
            match params.iter_mut().find(|(existing, _)| existing == key) {
                Some(slot) => slot.1 = value.clone(),
                None => params.push((key.clone(), value.clone())),
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn sort_directive_is_omitted_when_absent() {
        let request = CatalogRequest {
            search_term: Some("dune".to_string()),
            ..CatalogRequest::default()
        };
        assert_eq!(request.list_params(), vec![pair("query", "dune")]);
    }

    #[test]
    fn extra_params_override_derived_ones() {
        let request = CatalogRequest {
            sort: Some(SortDirection::Asc),
            extra_params: vec![pair("page", "2"), pair("sort_by", "popularity.desc")],
            ..CatalogRequest::default()
        };
        assert_eq!(
            request.list_params(),
            vec![pair("sort_by", "popularity.desc"), pair("page", "2")]
        );
    }
}
