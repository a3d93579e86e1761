use serde::{Deserialize, Serialize};
use std::fmt;

/// Категории, по которым коллекцию можно искать из карточки объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTerm {
    Culture,
    Technique,
    Medium,
    Person,
}

impl SearchTerm {
    /// Имя параметра, которое уходит в поисковый API
    pub fn code(&self) -> &'static str {
        match self {
            SearchTerm::Culture => "culture",
            SearchTerm::Technique => "technique",
            SearchTerm::Medium => "medium",
            SearchTerm::Person => "person",
        }
    }

    /// Подпись факта в карточке
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchTerm::Culture => "Culture",
            SearchTerm::Technique => "Technique",
            SearchTerm::Medium => "Medium",
            SearchTerm::Person => "Person",
        }
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_names() {
        for term in [
            SearchTerm::Culture,
            SearchTerm::Technique,
            SearchTerm::Medium,
            SearchTerm::Person,
        ] {
            let json = serde_json::to_string(&term).unwrap();
            assert_eq!(json, format!("\"{}\"", term.code()));
            let parsed: SearchTerm = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, term);
        }
        assert!(serde_json::from_str::<SearchTerm>("\"style\"").is_err());
        assert!(serde_json::from_str::<SearchTerm>("\"Culture\"").is_err());
    }

}
