//! Full-text search against an Azure Cognitive Search index

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchDocument {
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct SearchResults {
    #[serde(default)]
    pub value: Vec<SearchDocument>,
}

impl SearchResults {
    /// Concatenate every document's content, one per line
    pub fn context(&self) -> String {
        self.value
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn search_index(
    query: &str,
    endpoint: &str,
    index_name: &str,
    api_key: &str,
    api_version: &str,
) -> Result<SearchResults, Error> {
    let url = format!(
        "{}/indexes/{}/docs/search",
        endpoint.trim_end_matches("/"),
        index_name
    );
    let payload = json!({
        "search": query,
        "queryType": "full",
    });

    let results = reqwest::Client::new()
        .post(url)
        .query(&[("api-version", api_version)])
        .header("Content-Type", "application/json")
        .header("api-key", api_key)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(results)
}
