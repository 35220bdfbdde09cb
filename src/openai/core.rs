use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Connection details for an Azure OpenAI chat deployment
#[derive(Clone, Debug)]
pub struct Deployment<'a> {
    pub endpoint: &'a str,
    pub name: &'a str,
    pub api_version: &'a str,
    pub api_key: &'a str,
}

pub async fn completion(messages: &[Message], deployment: &Deployment<'_>) -> Result<Value, Error> {
    let payload = json!({
        "messages": messages,
    });
    let url = format!(
        "{}/openai/deployments/{}/chat/completions",
        deployment.endpoint.trim_end_matches("/"),
        deployment.name
    );
    let response = reqwest::Client::new()
        .post(url)
        .query(&[("api-version", deployment.api_version)])
        .header("api-key", deployment.api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}

/// Runs a single chat turn and returns the assistant's content
pub async fn chat(messages: &[Message], deployment: &Deployment<'_>) -> Result<String, Error> {
    let resp = completion(messages, deployment).await?;

    tracing::debug!("Completion response: {}", resp);

    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or(anyhow!("No message received. Resp:\n\n {}", resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(url: &str) -> Deployment<'_> {
        Deployment {
            endpoint: url,
            name: "gpt-35-turbo",
            api_version: "2024-02-01",
            api_key: "test-key",
        }
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(Role::System, "Be brief.");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, json!({"role": "system", "content": "Be brief."}));
    }

    #[tokio::test]
    async fn test_chat_basic_response() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1694268190,
            "model": "gpt-35-turbo",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "The campus opens at 8am."
                },
                "finish_reason": "stop"
            }]
        }"#;

        let mock = server
            .mock("POST", "/openai/deployments/gpt-35-turbo/chat/completions")
            .match_query(mockito::Matcher::UrlEncoded(
                "api-version".into(),
                "2024-02-01".into(),
            ))
            .match_header("api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let url = server.url();
        let messages = vec![Message::new(Role::User, "When does the campus open?")];
        let result = chat(&messages, &deployment(&url)).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "The campus opens at 8am.");
    }

    #[tokio::test]
    async fn test_chat_without_content_is_an_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/openai/deployments/gpt-35-turbo/chat/completions")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]}"#)
            .create_async()
            .await;

        let url = server.url();
        let messages = vec![Message::new(Role::User, "Hi")];
        let result = chat(&messages, &deployment(&url)).await;

        assert!(result.is_err());
    }
}
