//! Answer a user's question from the search index: retrieve
//! documents, fit them in the token budget, then ask the chat
//! deployment.

use anyhow::{Error, Result};

use super::context::TokenCounter;
use super::prompt::transcript;
use crate::core::AppConfig;
use crate::openai::{Deployment, chat};
use crate::search::search_index;

pub async fn answer_query(
    config: &AppConfig,
    counter: &TokenCounter,
    query: &str,
) -> Result<String, Error> {
    let results = search_index(
        query,
        &config.search_endpoint,
        &config.search_index_name,
        &config.search_api_key,
        &config.search_api_version,
    )
    .await?;

    tracing::debug!("Search returned {} documents", results.value.len());

    let budget = counter.context_budget(query, config.max_tokens);
    let context = counter.truncate(&results.context(), budget);

    let messages = transcript(&config.system_message, query, &context);
    let deployment = Deployment {
        endpoint: &config.openai_endpoint,
        name: &config.openai_deployment,
        api_version: &config.openai_api_version,
        api_key: &config.openai_api_key,
    };

    chat(&messages, &deployment).await
}
