use super::record::FeaturedRecord;
use crate::enums::SearchTerm;
use serde::{Deserialize, Serialize};

/// Пара (категория, значение) для запроса к поисковому API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFacet {
    pub term: SearchTerm,
    pub value: String,
}

impl SearchFacet {
    pub fn new(term: SearchTerm, value: impl Into<String>) -> Self {
        Self {
            term,
            value: value.into(),
        }
    }

    /// Facet for a record field. Medium values are searched in lowercase.
    pub fn from_field(term: SearchTerm, raw: &str) -> Self {
        let value = match term {
            SearchTerm::Medium => raw.to_lowercase(),
            _ => raw.to_string(),
        };
        Self { term, value }
    }
}

/// Ответ поискового API. Для этого слоя содержимое непрозрачно:
/// он только передаёт его родителю.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultSet {
    #[serde(default)]
    pub info: serde_json::Value,
    #[serde(default)]
    pub records: Vec<FeaturedRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_is_lowercased() {
        let facet = SearchFacet::from_field(SearchTerm::Medium, "Terracotta, Black Slip");
        assert_eq!(facet.value, "terracotta, black slip");
    }

    #[test]
    fn test_other_terms_keep_case() {
        let facet = SearchFacet::from_field(SearchTerm::Culture, "Greek");
        assert_eq!(facet, SearchFacet::new(SearchTerm::Culture, "Greek"));
        let facet = SearchFacet::from_field(SearchTerm::Person, "Exekias");
        assert_eq!(facet.value, "Exekias");
    }

    #[test]
    fn test_result_set_tolerates_partial_payload() {
        let results: SearchResultSet =
            serde_json::from_str(r#"{"info": {"totalrecords": 1}, "records": [{"title": "Cup"}]}"#)
                .unwrap();
        assert_eq!(results.info["totalrecords"], 1);
        assert_eq!(results.records[0].title.as_deref(), Some("Cup"));

        let empty: SearchResultSet = serde_json::from_str("{}").unwrap();
        assert!(empty.records.is_empty());
    }
}
