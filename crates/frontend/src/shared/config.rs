//! Search API configuration
//!
//! Provided once by the app shell through Leptos context. Components that
//! run outside the shell fall back to [`SearchConfig::default`].

use leptos::prelude::*;

pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for SearchConfig {
    /// The API key is baked in at build time from `MUSEUM_API_KEY`.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: option_env!("MUSEUM_API_KEY").unwrap_or_default().to_string(),
        }
    }
}

/// Config from context, or the default one
pub fn use_search_config() -> SearchConfig {
    use_context::<SearchConfig>().unwrap_or_default()
}
