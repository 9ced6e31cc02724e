/*
[INPUT]:  Base URL, optional timeouts, request method/path/body
[OUTPUT]: Classified ApiResult values, rendered once per call through a ResponseSink
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response classification
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::http::{ApiFailure, ApiResult, Endpoint, LendingError, ResponseSink, Result};

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// HTTP client for the lending backend
#[derive(Debug, Clone)]
pub struct LendingClient {
    http_client: Client,
    base_url: Url,
}

impl LendingClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LendingError::Config(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base path.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                LendingError::Config(format!("base url cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Issue one request to a raw path, render the outcome, and return the
    /// success value.
    pub async fn call<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        sink: &dyn ResponseSink,
    ) -> Option<Value>
    where
        B: Serialize + ?Sized,
    {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let result = self.execute(method, &segments, body).await;
        render_once(result, sink)
    }

    /// Issue one request to a known endpoint, render the outcome, and return
    /// the success value.
    pub async fn dispatch<B>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
        sink: &dyn ResponseSink,
    ) -> Option<Value>
    where
        B: Serialize + ?Sized,
    {
        let result = self
            .execute(endpoint.method(), &endpoint.segments(), body)
            .await;
        render_once(result, sink)
    }

    /// Issue one request and classify the response without rendering it.
    pub async fn execute<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        let url = match self.url_for(segments) {
            Ok(url) => url,
            Err(err) => return ApiResult::Failure(ApiFailure::network(err.to_string())),
        };

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %method, url = %url, "sending request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(method = %method, url = %url, error = %err, "request failed");
                return ApiResult::Failure(ApiFailure::network(err.to_string()));
            }
        };

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(JSON_CONTENT_TYPE));

        if !is_json {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                body = %text,
                "non-JSON response"
            );
            return ApiResult::Failure(ApiFailure::non_json(status));
        }

        let data = match response.bytes().await {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(data) => data,
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "malformed JSON body");
                    return ApiResult::Failure(ApiFailure::network(err.to_string()));
                }
            },
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "failed to read response body");
                return ApiResult::Failure(ApiFailure::network(err.to_string()));
            }
        };

        if !status.is_success() {
            tracing::warn!(method = %method, url = %url, status = status.as_u16(), "API error");
            return ApiResult::Failure(ApiFailure::Api {
                status: status.as_u16(),
                payload: data,
            });
        }

        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "request succeeded");
        ApiResult::Success(data)
    }
}

fn render_once(result: ApiResult, sink: &dyn ResponseSink) -> Option<Value> {
    let (value, is_error) = result.render_parts();
    sink.render(&value, is_error);
    result.into_data()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingSink {
        renders: Mutex<Vec<(Value, bool)>>,
    }

    impl ResponseSink for RecordingSink {
        fn render(&self, value: &Value, is_error: bool) {
            self.renders
                .lock()
                .expect("renders lock")
                .push((value.clone(), is_error));
        }
    }

    impl RecordingSink {
        fn renders(&self) -> Vec<(Value, bool)> {
            self.renders.lock().expect("renders lock").clone()
        }
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let client = LendingClient::new("http://localhost:8000/api/").expect("client init");
        let url = client.url_for(&["view-loans", "42"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/api/view-loans/42");
    }

    #[test]
    fn test_url_for_encodes_path_parameter() {
        let client = LendingClient::new("http://localhost:8000").expect("client init");
        let url = client.url_for(&["view-customer", "1/2"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/view-customer/1%2F2");
    }

    #[test]
    fn test_rejects_base_without_path() {
        let err = LendingClient::new("mailto:loans@example.com").expect_err("should reject");
        assert!(matches!(err, LendingError::Config(_)));
    }

    #[tokio::test]
    async fn test_html_response_is_not_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view-customer/9"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let result = client
            .execute(Method::GET, &["view-customer", "9"], None::<&Value>)
            .await;

        assert_eq!(
            result,
            ApiResult::Failure(ApiFailure::NonJsonResponse {
                status: 200,
                status_text: "OK".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_is_non_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view-loans/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let sink = RecordingSink::default();
        let data = client
            .call(Method::GET, "/view-loans/1", None::<&Value>, &sink)
            .await;

        assert_eq!(data, None);
        let renders = sink.renders();
        assert_eq!(renders.len(), 1);
        assert_eq!(
            renders[0],
            (
                serde_json::json!({
                    "error": "Network/Server Error",
                    "details": "Server Error (500): Internal Server Error",
                }),
                true
            )
        );
    }

    #[tokio::test]
    async fn test_json_error_status_renders_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(
                ResponseTemplate::new(400).set_body_raw(r#"{"error": "invalid"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let sink = RecordingSink::default();
        let data = client
            .call(Method::POST, "/register", Some(&serde_json::json!({})), &sink)
            .await;

        assert_eq!(data, None);
        assert_eq!(
            sink.renders(),
            vec![(serde_json::json!({ "error": "invalid" }), true)]
        );
    }

    #[tokio::test]
    async fn test_success_returns_and_renders_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check-eligibility"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "customer_id": 3, "tenure": 12 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "customer_id": 3,
                "approval": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let sink = RecordingSink::default();
        let body = serde_json::json!({ "customer_id": 3, "tenure": 12 });
        let data = client
            .dispatch(&Endpoint::CheckEligibility, Some(&body), &sink)
            .await;

        let expected = serde_json::json!({ "customer_id": 3, "approval": true });
        assert_eq!(data, Some(expected.clone()));
        assert_eq!(sink.renders(), vec![(expected, false)]);
    }

    #[tokio::test]
    async fn test_get_sends_json_content_type_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view-customer/5"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 5 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let sink = RecordingSink::default();
        let data = client.view_customer("5", &sink).await;
        assert_eq!(data, Some(serde_json::json!({ "id": 5 })));
    }

    #[tokio::test]
    async fn test_malformed_json_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view-loans/1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&server)
            .await;

        let client = LendingClient::new(&server.uri()).expect("client init");
        let result = client
            .execute(Method::GET, &["view-loans", "1"], None::<&Value>)
            .await;

        assert!(matches!(result, ApiResult::Failure(ApiFailure::Network { .. })));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);

        let client =
            LendingClient::new(&format!("http://127.0.0.1:{port}")).expect("client init");
        let sink = RecordingSink::default();
        let data = client.view_loans("1", &sink).await;

        assert_eq!(data, None);
        let renders = sink.renders();
        assert_eq!(renders.len(), 1);
        let (value, is_error) = &renders[0];
        assert!(is_error);
        assert_eq!(value["error"], "Network/Server Error");
        assert!(value["details"].is_string());
    }
}
