use crate::shared::api_utils::query_url;
use crate::shared::config::SearchConfig;
use contracts::collection::SearchResultSet;
use contracts::enums::SearchTerm;
use gloo_net::http::Request;

/// URL of a collection search for a single term/value pair
pub fn search_url(config: &SearchConfig, term: SearchTerm, value: &str) -> String {
    query_url(
        &config.base_url,
        "/object",
        &[("apikey", &config.api_key), (term.code(), value)],
    )
}

/// Search the collection for objects where `term` matches `value`
pub async fn fetch_query_results_from_term_and_value(
    config: &SearchConfig,
    term: SearchTerm,
    value: &str,
) -> Result<SearchResultSet, String> {
    let url = search_url(config, term, value);
    log::debug!("collection search: {}={}", term, value);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SearchResultSet = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_uses_term_code() {
        let config = SearchConfig {
            base_url: "https://api.example.org".to_string(),
            api_key: "secret".to_string(),
        };
        assert_eq!(
            search_url(&config, SearchTerm::Person, "Jean Dubuffet"),
            "https://api.example.org/object?apikey=secret&person=Jean%20Dubuffet"
        );
    }
}
