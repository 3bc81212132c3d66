//! Backend load client.

use crate::error::{LoadError, extract_detail};
use integration_loader_core::IntegrationType;
use integration_loader_records::Record;
use reqwest::multipart::Form;
use rootcause::Report;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Multipart field carrying the serialized credentials.
const CREDENTIALS_FIELD: &str = "credentials";

/// Client for the integration backend's load endpoints.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LoaderClient {
    http: reqwest::Client,
    base_url: String,
}

impl LoaderClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend root (e.g., "http://localhost:8000")
    /// * `timeout` - Whole-request timeout, or `None` to wait indefinitely
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, Report<LoadError>> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| LoadError::ClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the backend root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the load URL for an integration.
    #[must_use]
    pub fn load_url(&self, integration: IntegrationType) -> String {
        format!(
            "{}/integrations/{}/load",
            self.base_url,
            integration.endpoint()
        )
    }

    /// Loads all records for an integration.
    ///
    /// `credentials` is the JSON-serialized credentials object and is sent
    /// unmodified. Exactly one request is made; there are no retries.
    #[instrument(skip(self, credentials), fields(integration = %integration))]
    pub async fn load(
        &self,
        integration: IntegrationType,
        credentials: &str,
    ) -> Result<Vec<Record>, LoadError> {
        let url = self.load_url(integration);
        let form = Form::new().text(CREDENTIALS_FIELD, credentials.to_owned());

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %url, "Failed to reach integration backend");
                if e.is_timeout() {
                    LoadError::Timeout { url: url.clone() }
                } else {
                    LoadError::ConnectionFailed {
                        url: url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            warn!(
                endpoint = %url,
                status = %status,
                detail = ?detail,
                "Integration backend rejected load"
            );
            return Err(LoadError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let records: Vec<Record> = response.json().await.map_err(|e| {
            warn!(error = %e, endpoint = %url, "Failed to parse load response");
            if e.is_timeout() {
                LoadError::Timeout { url: url.clone() }
            } else {
                LoadError::MalformedResponse {
                    reason: e.to_string(),
                }
            }
        })?;

        debug!(record_count = records.len(), "Loaded integration records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Multipart, Path},
        http::StatusCode,
        routing::post,
    };
    use integration_loader_records::{LOAD_FAILED_MESSAGE, RecordKind};
    use serde_json::{Value, json};

    const LOAD_ROUTE: &str = "/integrations/{endpoint}/load";

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve test backend");
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> LoaderClient {
        LoaderClient::new(base_url, Some(Duration::from_secs(5))).expect("build client")
    }

    /// Answers with a container named after the received credentials.
    async fn echo_credentials(
        Path(endpoint): Path<String>,
        mut multipart: Multipart,
    ) -> Json<Value> {
        let mut credentials = String::new();
        while let Some(field) = multipart.next_field().await.expect("multipart field") {
            if field.name() == Some(CREDENTIALS_FIELD) {
                credentials = field.text().await.expect("field text");
            }
        }
        Json(json!([
            {"id": endpoint, "name": credentials, "type": "object_type"},
            {"id": 7, "name": "child", "type": "contact", "parent_path_or_name": credentials}
        ]))
    }

    #[test]
    fn load_url_uses_endpoint_mapping() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.load_url(IntegrationType::Airtable),
            "http://localhost:8000/integrations/airtable/load"
        );
        assert_eq!(
            client.load_url(IntegrationType::HubSpot),
            "http://localhost:8000/integrations/hubspot/load"
        );
    }

    #[tokio::test]
    async fn load_sends_credentials_verbatim() {
        let base_url = spawn_backend(Router::new().route(LOAD_ROUTE, post(echo_credentials))).await;
        let credentials = r#"{"access_token":"abc","workspace":"acme"}"#;

        let records = client(&base_url)
            .load(IntegrationType::HubSpot, credentials)
            .await
            .expect("load should succeed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("hubspot"));
        assert_eq!(records[0].name.as_deref(), Some(credentials));
        assert_eq!(records[0].kind, RecordKind::ObjectType);
        assert_eq!(records[1].id.as_deref(), Some("7"));
        assert_eq!(records[1].parent_path_or_name.as_deref(), Some(credentials));
    }

    #[tokio::test]
    async fn rejection_surfaces_detail() {
        let router = Router::new().route(
            LOAD_ROUTE,
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "bad credentials"})),
                )
            }),
        );
        let base_url = spawn_backend(router).await;

        let err = client(&base_url)
            .load(IntegrationType::Notion, "{}")
            .await
            .expect_err("load should fail");

        assert_eq!(
            err,
            LoadError::Rejected {
                status: 400,
                detail: Some("bad credentials".to_string()),
            }
        );
        assert_eq!(err.user_message(), "bad credentials");
    }

    #[tokio::test]
    async fn rejection_without_detail_uses_fallback() {
        let router = Router::new().route(
            LOAD_ROUTE,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base_url = spawn_backend(router).await;

        let err = client(&base_url)
            .load(IntegrationType::Airtable, "{}")
            .await
            .expect_err("load should fail");

        assert!(matches!(
            err,
            LoadError::Rejected {
                status: 500,
                detail: None
            }
        ));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn non_list_body_is_malformed() {
        let router = Router::new().route(
            LOAD_ROUTE,
            post(|| async { Json(json!({"records": []})) }),
        );
        let base_url = spawn_backend(router).await;

        let err = client(&base_url)
            .load(IntegrationType::Notion, "{}")
            .await
            .expect_err("load should fail");

        assert!(matches!(err, LoadError::MalformedResponse { .. }));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn empty_list_is_success() {
        let router = Router::new().route(LOAD_ROUTE, post(|| async { Json(json!([])) }));
        let base_url = spawn_backend(router).await;

        let records = client(&base_url)
            .load(IntegrationType::Notion, "{}")
            .await
            .expect("load should succeed");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_is_connection_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .load(IntegrationType::HubSpot, "{}")
            .await
            .expect_err("load should fail");

        assert!(matches!(err, LoadError::ConnectionFailed { .. }));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let router = Router::new().route(
            LOAD_ROUTE,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([]))
            }),
        );
        let base_url = spawn_backend(router).await;
        let client = LoaderClient::new(base_url, Some(Duration::from_millis(100)))
            .expect("build client");

        let err = client
            .load(IntegrationType::Notion, "{}")
            .await
            .expect_err("load should time out");

        assert!(matches!(err, LoadError::Timeout { .. }));
    }

    #[tokio::test]
    async fn without_timeout_waits_for_slow_backend() {
        let router = Router::new().route(
            LOAD_ROUTE,
            post(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(json!([{"name": "Projects", "type": "Base"}]))
            }),
        );
        let base_url = spawn_backend(router).await;
        let client = LoaderClient::new(base_url, None).expect("build client");

        let records = client
            .load(IntegrationType::Airtable, "{}")
            .await
            .expect("load should wait for the backend");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, RecordKind::Base);
    }
}
