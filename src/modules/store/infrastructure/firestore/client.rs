//! Firestore REST adapter for the `DocumentStore` port
//!
//! Each request waits on a process-wide rate limiter and is sent exactly
//! once; retrying is left to callers. A 400/412 from the query endpoints
//! (typically `FAILED_PRECONDITION: The query requires an index`) surfaces as
//! `StoreError::QueryRejected` so search can fall back.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::codec::{decode_fields, decode_value, encode_fields, encode_structured_query, encode_value, field_path};
use super::rate_limit::{create_rate_limiter, DirectRateLimiter};
use crate::modules::store::domain::{Document, DocumentStore, StructuredQuery};
use crate::shared::config::FirestoreConfig;
use crate::shared::errors::{StoreError, StoreResult};

const COUNT_ALIAS: &str = "total";

pub struct FirestoreDocumentStore {
    http: Client,
    rate_limiter: DirectRateLimiter,
    config: FirestoreConfig,
}

impl FirestoreDocumentStore {
    pub fn new(config: FirestoreConfig) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let rate_limiter = create_rate_limiter(config.requests_per_second, config.burst_size)?;

        Ok(Self {
            http,
            rate_limiter,
            config,
        })
    }

    fn database_path(&self) -> String {
        format!(
            "projects/{}/databases/{}",
            self.config.project_id, self.config.database_id
        )
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.database_path()
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.documents_root(),
            urlencoding::encode(collection),
            urlencoding::encode(id)
        )
    }

    fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/documents/{}/{}", self.database_path(), collection, id)
    }

    async fn execute(&self, request: RequestBuilder, operation: &str) -> StoreResult<Value> {
        self.rate_limiter.until_ready().await;

        let request = match &self.config.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        };

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "Firestore {} -> {} in {}ms",
            operation,
            status,
            started.elapsed().as_millis()
        );

        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok());
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let error = map_error_response(status.as_u16(), &body, retry_after);

        if !matches!(error, StoreError::NotFound { .. }) {
            warn!("Firestore {} failed: {}", operation, error);
        }
        Err(error)
    }

    async fn commit_transform(&self, collection: &str, id: &str, transform: Value) -> StoreResult<()> {
        let body = json!({
            "writes": [{
                "transform": {
                    "document": self.document_name(collection, id),
                    "fieldTransforms": [transform],
                },
                "currentDocument": { "exists": true },
            }]
        });
        let url = format!("{}:commit", self.documents_root());
        self.execute(self.http.post(url).json(&body), "commit")
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    fn backend_name(&self) -> &'static str {
        "firestore"
    }

    async fn count(&self, query: &StructuredQuery) -> StoreResult<u64> {
        let body = json!({
            "structuredAggregationQuery": {
                "structuredQuery": encode_structured_query(&query.without_paging()),
                "aggregations": [{ "alias": COUNT_ALIAS, "count": {} }],
            }
        });
        let url = format!("{}:runAggregationQuery", self.documents_root());
        let response = self
            .execute(self.http.post(url).json(&body), "runAggregationQuery")
            .await?;
        parse_count(&response)
    }

    async fn run_query(&self, query: &StructuredQuery) -> StoreResult<Vec<Document>> {
        let body = json!({ "structuredQuery": encode_structured_query(query) });
        let url = format!("{}:runQuery", self.documents_root());
        let response = self
            .execute(self.http.post(url).json(&body), "runQuery")
            .await?;
        parse_query_results(&response)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let url = self.document_url(collection, id);
        match self.execute(self.http.get(url), "get").await {
            Ok(response) => parse_document(&response).map(Some),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, collection: &str, document: &Document) -> StoreResult<()> {
        let url = self.document_url(collection, &document.id);
        let body = json!({ "fields": encode_fields(&document.fields) });
        self.execute(self.http.patch(url).json(&body), "patch")
            .await
            .map(|_| ())
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        values: Vec<Value>,
    ) -> StoreResult<()> {
        let transform = json!({
            "fieldPath": field_path(field),
            "appendMissingElements": {
                "values": values.iter().map(encode_value).collect::<Vec<_>>(),
            },
        });
        self.commit_transform(collection, id, transform).await
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> StoreResult<()> {
        let transform = json!({
            "fieldPath": field_path(field),
            "increment": encode_value(&Value::from(delta)),
        });
        self.commit_transform(collection, id, transform).await
    }
}

/// Translate a non-2xx Firestore response into a store error
pub fn map_error_response(status: u16, body: &Value, retry_after: Option<u64>) -> StoreError {
    let message = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .unwrap_or("no error message")
        .to_string();

    match status {
        400 | 412 => StoreError::QueryRejected { reason: message },
        401 | 403 => StoreError::AuthenticationFailed,
        404 => StoreError::NotFound { resource: message },
        429 => StoreError::RateLimit {
            retry_after: retry_after.unwrap_or(1),
        },
        _ => StoreError::Unavailable {
            message: format!("HTTP {}: {}", status, message),
        },
    }
}

/// Document id is the last segment of its resource name
pub fn parse_document(value: &Value) -> StoreResult<Document> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::InvalidResponse {
            message: "document without a name".to_string(),
        })?;
    let id = name.rsplit('/').next().unwrap_or(name);

    let fields = match value.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields)?,
        _ => Default::default(),
    };

    Ok(Document::new(id, fields))
}

/// `:runQuery` streams an array of `{document?, readTime}` entries
pub fn parse_query_results(response: &Value) -> StoreResult<Vec<Document>> {
    let entries = response.as_array().ok_or_else(|| StoreError::InvalidResponse {
        message: "runQuery response is not an array".to_string(),
    })?;

    entries
        .iter()
        .filter_map(|entry| entry.get("document"))
        .map(parse_document)
        .collect()
}

pub fn parse_count(response: &Value) -> StoreResult<u64> {
    let entries = response.as_array().ok_or_else(|| StoreError::InvalidResponse {
        message: "runAggregationQuery response is not an array".to_string(),
    })?;

    let typed = entries
        .iter()
        .find_map(|entry| entry.pointer(&format!("/result/aggregateFields/{}", COUNT_ALIAS)))
        .ok_or_else(|| StoreError::InvalidResponse {
            message: "count aggregation missing from response".to_string(),
        })?;

    decode_value(typed)?
        .as_u64()
        .ok_or_else(|| StoreError::InvalidResponse {
            message: format!("count is not a non-negative integer: {}", typed),
        })
}
