use crate::domain::endpoints;
use crate::domain::model::ContactMessage;
use crate::domain::ports::ContentSource;
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// HTTP client for the content API. Requests go to `base_url + endpoint`.
///
/// No timeout is set, a request that never answers never resolves.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn try_fetch(&self, endpoint: &str) -> Result<Option<Value>> {
        let url = self.url(endpoint);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            tracing::error!("HTTP error fetching {}: status {}", endpoint, status.as_u16());
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn fetch_resource(&self, endpoint: &str) -> Option<Value> {
        match self.try_fetch(endpoint).await {
            Ok(Some(Value::Null)) => None,
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", endpoint, e);
                None
            }
        }
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<()> {
        let url = self.url(endpoints::CONTACTS);
        tracing::debug!("Posting contact message to: {}", url);

        // .json() 會自動設定 Content-Type: application/json
        let response = self.client.post(&url).json(message).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(FolioError::SubmissionRejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_resource_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/skills");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([{"name": "Rust"}]));
        });

        let client = ApiClient::new(server.base_url());
        let value = client.fetch_resource(endpoints::SKILLS).await;

        api_mock.assert();
        assert_eq!(value, Some(json!([{"name": "Rust"}])));
    }

    #[tokio::test]
    async fn test_fetch_resource_keeps_query_string() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/educations")
                .query_param("_sort", "startYear:DESC");
            then.status(200).json_body(json!([]));
        });

        let client = ApiClient::new(format!("{}/", server.base_url()));
        assert_eq!(client.base_url(), server.base_url());
        let value = client.fetch_resource(endpoints::EDUCATIONS).await;

        api_mock.assert();
        assert_eq!(value, Some(json!([])));
    }

    #[tokio::test]
    async fn test_fetch_resource_non_success_is_none() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/profile");
            then.status(404);
        });

        let client = ApiClient::new(server.base_url());
        assert_eq!(client.fetch_resource(endpoints::PROFILE).await, None);
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_resource_invalid_json_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/galleries");
            then.status(200).body("<html>not json</html>");
        });

        let client = ApiClient::new(server.base_url());
        assert_eq!(client.fetch_resource(endpoints::GALLERIES).await, None);
    }

    #[tokio::test]
    async fn test_fetch_resource_transport_failure_is_none() {
        // 沒有服務在這個埠上
        let client = ApiClient::new("http://127.0.0.1:9");
        assert_eq!(client.fetch_resource(endpoints::PROFILE).await, None);
    }

    #[tokio::test]
    async fn test_submit_contact_posts_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/contacts")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello"
                }));
            then.status(200).json_body(json!({"id": 1}));
        });

        let client = ApiClient::new(server.base_url());
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };

        assert!(client.submit_contact(&message).await.is_ok());
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_submit_contact_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/contacts");
            then.status(400);
        });

        let client = ApiClient::new(server.base_url());
        let result = client.submit_contact(&ContactMessage::default()).await;

        assert!(matches!(
            result,
            Err(FolioError::SubmissionRejected { status: 400 })
        ));
    }
}
