use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, header};
use tracing::{debug, warn};

use fraudwatch_types::models::{Report, ReportInsert};

use crate::{ReportStore, StoreError};

pub const TABLE: &str = "fraud_reports";

/// Report store on a hosted PostgREST endpoint (Supabase style).
#[derive(Clone)]
pub struct RestStore {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

impl ReportStore for RestStore {
    async fn insert(&self, payload: &ReportInsert) -> Result<Report, StoreError> {
        let resp = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[payload])
            .send()
            .await?;

        let mut rows: Vec<Report> = check(resp).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::Decode("insert returned no rows".into()));
        }
        Ok(rows.swap_remove(0))
    }

    async fn list(&self) -> Result<Vec<Report>, StoreError> {
        let resp = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc,id.desc")])
            .send()
            .await?;

        let rows: Vec<Report> = check(resp).await?.json().await?;
        debug!("Fetched {} reports from {}", rows.len(), self.endpoint);
        Ok(rows)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let resp = self
            .request(Method::HEAD)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let resp = check(resp).await?;
        let range = resp
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| StoreError::Decode("missing Content-Range header".into()))?;

        parse_content_range(range)
            .ok_or_else(|| StoreError::Decode(format!("unusable Content-Range '{}'", range)))
    }

    async fn update(&self, id: i64, payload: &ReportInsert) -> Result<Report, StoreError> {
        let resp = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        let mut rows: Vec<Report> = check(resp).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(rows.swap_remove(0))
    }
}

/// Turn a non-2xx response into a `StoreError`, keeping the body for the log.
async fn check(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    warn!("Store responded {}: {}", status, body);

    let detail = format!("{}: {}", status, body);
    if status.is_client_error() {
        Err(StoreError::Rejected(detail))
    } else {
        Err(StoreError::Backend(detail))
    }
}

/// Total from a `Content-Range` value such as `0-24/25` or `*/0`.
pub fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::Query,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
    };
    use serde_json::{Value, json};

    const KEY: &str = "anon-key";

    fn row(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "mobile_number": "01712345678",
            "amount_bdt": 500.0,
            "created_at": "2025-03-01T10:15:30.123456+00:00",
            "updated_at": "2025-03-01T10:15:30.123456+00:00",
        })
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(KEY)
    }

    async fn select(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> impl IntoResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        assert_eq!(q.get("select").map(String::as_str), Some("*"));
        if headers.get("prefer").and_then(|v| v.to_str().ok()) == Some("count=exact") {
            return ([(header::CONTENT_RANGE, "0-24/25")], "").into_response();
        }
        assert_eq!(q.get("order").map(String::as_str), Some("created_at.desc,id.desc"));
        Json(json!([row(2, "Rahim"), row(1, "Karim")])).into_response()
    }

    async fn create(headers: HeaderMap, Json(body): Json<Vec<Value>>) -> impl IntoResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let name = body[0]["name"].as_str().unwrap_or_default().to_string();
        (StatusCode::CREATED, Json(json!([row(3, &name)]))).into_response()
    }

    async fn patch(Query(q): Query<HashMap<String, String>>, Json(body): Json<Value>) -> impl IntoResponse {
        match q.get("id").map(String::as_str) {
            Some("eq.1") => Json(json!([row(1, body["name"].as_str().unwrap_or_default())])),
            _ => Json(json!([])),
        }
    }

    async fn spawn_mock() -> String {
        serve(Router::new().route(
            &format!("/rest/v1/{}", TABLE),
            get(select).post(create).patch(patch),
        ))
        .await
    }

    /// A store that answers 500 to selects, `*` as its count and `[]` to inserts.
    async fn spawn_broken_mock() -> String {
        async fn select(headers: HeaderMap) -> impl IntoResponse {
            if headers.get("prefer").and_then(|v| v.to_str().ok()) == Some("count=exact") {
                return ([(header::CONTENT_RANGE, "0-24/*")], "").into_response();
            }
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        }
        async fn create() -> impl IntoResponse {
            (StatusCode::CREATED, Json(json!([])))
        }

        serve(Router::new().route(&format!("/rest/v1/{}", TABLE), get(select).post(create))).await
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn store(base: &str, key: &str) -> RestStore {
        RestStore::new(base, key, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn content_range_parsing() {
        assert_eq!(parse_content_range("0-24/25"), Some(25));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-24/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let s = store("https://example.supabase.co/", KEY);
        assert_eq!(s.endpoint(), "https://example.supabase.co/rest/v1/fraud_reports");
    }

    #[tokio::test]
    async fn list_count_and_insert_against_mock() {
        let base = spawn_mock().await;
        let s = store(&base, KEY);

        let reports = s.list().await.unwrap();
        assert_eq!(reports.iter().map(|r| r.id).collect::<Vec<_>>(), [2, 1]);

        assert_eq!(s.count().await.unwrap(), 25);

        let created = s
            .insert(&ReportInsert {
                name: "Karim".into(),
                mobile_number: "01712345678".into(),
                amount_bdt: 500.0,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.name, "Karim");
    }

    #[tokio::test]
    async fn update_with_empty_result_is_not_found() {
        let base = spawn_mock().await;
        let s = store(&base, KEY);
        let payload = ReportInsert {
            name: "Karim Mia".into(),
            mobile_number: "01712345678".into(),
            amount_bdt: 10.0,
        };

        assert_eq!(s.update(1, &payload).await.unwrap().name, "Karim Mia");
        assert_eq!(s.update(7, &payload).await.unwrap_err(), StoreError::NotFound(7));
    }

    #[tokio::test]
    async fn client_errors_are_rejections() {
        let base = spawn_mock().await;
        let err = store(&base, "wrong-key").list().await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn server_errors_are_backend_failures() {
        let base = spawn_broken_mock().await;
        let err = store(&base, KEY).list().await.unwrap_err();
        assert!(matches!(err, StoreError::Backend(ref detail) if detail.contains("500")), "got {err:?}");
    }

    #[tokio::test]
    async fn unusable_payloads_are_decode_errors() {
        let base = spawn_broken_mock().await;
        let s = store(&base, KEY);

        let err = s.count().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(ref m) if m.contains("0-24/*")), "got {err:?}");

        let err = s
            .insert(&ReportInsert {
                name: "Karim".into(),
                mobile_number: "01712345678".into(),
                amount_bdt: 500.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn count_without_content_range_is_a_decode_error() {
        let base = serve(Router::new().route(&format!("/rest/v1/{}", TABLE), get(|| async { "" }))).await;
        let err = store(&base, KEY).count().await.unwrap_err();
        assert_eq!(err, StoreError::Decode("missing Content-Range header".into()));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = store(&format!("http://{}", addr), KEY).count().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)), "got {err:?}");
    }
}
