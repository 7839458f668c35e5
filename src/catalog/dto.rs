use serde::Deserialize;

/// Query string for `GET /foods`. `search` wins over `category`; empty
/// strings are treated as absent, mirroring the UI which only sends a
/// search term once it has at least two characters.
#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_params_optional() {
        let q: FoodQuery = serde_json::from_str("{}").unwrap();
        assert!(q.search.is_none());
        assert!(q.category.is_none());

        let q: FoodQuery = serde_json::from_str(r#"{"search":"maç"}"#).unwrap();
        assert_eq!(q.search.as_deref(), Some("maç"));
    }
}
