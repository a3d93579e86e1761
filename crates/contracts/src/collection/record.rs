use serde::{Deserialize, Serialize};

// ============================================================================
// Featured record
// ============================================================================

/// Объект коллекции в том виде, в котором его отдаёт поисковый API.
///
/// Все поля необязательны: API опускает пустые атрибуты, а иногда
/// присылает `null` или пустую строку.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dated: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<RecordImage>>,
    #[serde(default)]
    pub primaryimageurl: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub people: Option<Vec<Person>>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub creditline: Option<String>,
}

/// Человек, связанный с объектом (автор, мастерская, владелец)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub displayname: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordImage {
    #[serde(default)]
    pub baseimageurl: Option<String>,
    #[serde(default)]
    pub alttext: Option<String>,
}

/// Значение поля, если оно есть и не пустое.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
