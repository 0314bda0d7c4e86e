use serde::Deserialize;
use tracing::debug;

/// Expected response body of the hello endpoint. Any other fields the server
/// sends are ignored.
#[derive(Debug, Deserialize)]
pub struct HelloReply {
    pub message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client for `GET /api/hello`.
///
/// The optional `name` query parameter is a configured literal, never taken
/// from input at call time. It models the deployment variant that requests
/// `/api/hello?name=User`.
#[derive(Debug, Clone)]
pub struct HelloClient {
    http: reqwest::Client,
    url: String,
    name: Option<String>,
}

impl HelloClient {
    pub fn new(base_url: &str, name: Option<String>) -> Self {
        let url = format!("{}/api/hello", base_url.trim_end_matches('/'));

        Self {
            http: reqwest::Client::new(),
            url,
            name,
        }
    }

    /// Issues the GET, decodes the JSON body, and extracts `message`.
    ///
    /// A body without a `message` field is a decode failure in this typed
    /// port; there is no "undefined" rendering. On every error path the
    /// caller's display stays untouched.
    pub async fn fetch_message(&self) -> Result<String, ApiError> {
        let mut req = self.http.get(&self.url);
        if let Some(name) = &self.name {
            req = req.query(&[("name", name.as_str())]);
        }

        debug!(url = %self.url, "issuing hello request");

        let response = req.send().await?;
        let status = response.status();

        debug!(%status, "hello response received");

        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let reply: HelloReply = serde_json::from_str(&body).map_err(ApiError::Decode)?;

        Ok(reply.message)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{ApiError, HelloClient};

    #[tokio::test]
    async fn extracts_message_from_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hello"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "message": "Hello, World!",
                    "extra": 42
                })),
            )
            .mount(&server)
            .await;

        let client = HelloClient::new(&server.uri(), None);
        let message = client.fetch_message().await.expect("fetch");
        assert_eq!(message, "Hello, World!");
    }

    #[tokio::test]
    async fn sends_configured_name_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hello"))
            .and(query_param("name", "User"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "Hello, User!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HelloClient::new(&server.uri(), Some("User".to_owned()));
        let message = client.fetch_message().await.expect("fetch");
        assert_eq!(message, "Hello, User!");
    }

    #[tokio::test]
    async fn empty_message_is_a_valid_reply() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hello"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": ""})),
            )
            .mount(&server)
            .await;

        let client = HelloClient::new(&server.uri(), None);
        let message = client.fetch_message().await.expect("fetch");
        assert_eq!(message, "");
    }

    #[tokio::test]
    async fn missing_message_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hello"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"greeting": "hi"})),
            )
            .mount(&server)
            .await;

        let client = HelloClient::new(&server.uri(), None);
        let err = client.fetch_message().await.expect_err("should not decode");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hello"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HelloClient::new(&server.uri(), None);
        let err = client.fetch_message().await.expect_err("should fail");
        match err {
            ApiError::Status(status) => assert_eq!(status.as_u16(), 500),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = HelloClient::new("http://localhost:5000/", None);
        assert_eq!(client.url, "http://localhost:5000/api/hello");
    }
}
