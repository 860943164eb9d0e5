use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
    keywords::KeywordList,
    source::KeywordSource,
    types::{SubmittedField, ValidationVerdict},
    validator,
};

#[derive(Clone)]
pub struct AppState {
    pub keywords: Arc<dyn KeywordSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// Overrides the configured keyword source for this request only.
    #[serde(default)]
    pub keyword_source_text: Option<String>,
    #[serde(default)]
    pub fields: Vec<SubmittedField>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub is_valid: bool,
    pub failed_field_index: Option<usize>,
    pub message: Option<String>,
    pub matched_keyword: Option<String>,
}

impl From<ValidationVerdict> for ValidateResponse {
    fn from(verdict: ValidationVerdict) -> Self {
        Self {
            is_valid: verdict.is_valid,
            failed_field_index: verdict.failed_field_index,
            message: verdict.failure_message().map(str::to_owned),
            matched_keyword: verdict.matched_keyword,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/validate", post(validate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    "formgate keyword validation API"
}

async fn health() -> &'static str {
    "ok"
}

async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, (axum::http::StatusCode, String)> {
    let raw = match request.keyword_source_text {
        Some(raw) => raw,
        None => state
            .keywords
            .raw_keywords()
            .await
            .map_err(internal_error)?
            .unwrap_or_default(),
    };

    let verdict = validator::validate(&KeywordList::normalize(&raw), &request.fields);
    Ok(Json(verdict.into()))
}

fn internal_error(error: anyhow::Error) -> (axum::http::StatusCode, String) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        format!("internal error: {error}"),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{Json, extract::State, http::StatusCode};
    use serde_json::json;

    use crate::{
        source::{InMemoryKeywordSource, KeywordSource},
        types::DISALLOWED_CONTENT_MESSAGE,
    };

    use super::{AppState, ValidateRequest, validate};

    struct BrokenKeywordSource;

    #[async_trait]
    impl KeywordSource for BrokenKeywordSource {
        async fn raw_keywords(&self) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("settings store unavailable"))
        }
    }

    fn state(source: impl KeywordSource + 'static) -> AppState {
        AppState {
            keywords: Arc::new(source),
        }
    }

    fn request(body: serde_json::Value) -> ValidateRequest {
        serde_json::from_value(body).expect("request should deserialize")
    }

    #[tokio::test]
    async fn rejects_first_matching_field() {
        let body = request(json!({
            "keywordSourceText": "viagra\ncasino",
            "fields": [
                {"kind": "email", "value": "buy@viagra-deals.com"},
                {"kind": "text", "value": "hello casino world"}
            ]
        }));

        let Json(response) = validate(
            State(state(InMemoryKeywordSource::default())),
            Json(body),
        )
        .await
        .expect("validate should succeed");

        assert!(!response.is_valid);
        assert_eq!(response.failed_field_index, Some(0));
        assert_eq!(response.message.as_deref(), Some(DISALLOWED_CONTENT_MESSAGE));
        assert_eq!(response.matched_keyword.as_deref(), Some("viagra"));
    }

    #[tokio::test]
    async fn falls_back_to_configured_source() {
        let body = request(json!({
            "fields": [{"kind": "textarea", "value": "Big CASINO bonus"}]
        }));

        let Json(response) = validate(
            State(state(InMemoryKeywordSource::new("casino"))),
            Json(body),
        )
        .await
        .expect("validate should succeed");

        assert!(!response.is_valid);
        assert_eq!(response.failed_field_index, Some(0));
    }

    #[tokio::test]
    async fn empty_request_source_overrides_configured_one() {
        let body = request(json!({
            "keywordSourceText": "",
            "fields": [{"kind": "text", "value": "casino"}]
        }));

        let Json(response) = validate(
            State(state(InMemoryKeywordSource::new("casino"))),
            Json(body),
        )
        .await
        .expect("validate should succeed");

        assert!(response.is_valid);
        assert_eq!(response.failed_field_index, None);
        assert_eq!(response.message, None);
    }

    #[tokio::test]
    async fn source_errors_map_to_internal_error() {
        let body = request(json!({"fields": [{"kind": "text", "value": "casino"}]}));

        let result = validate(State(state(BrokenKeywordSource)), Json(body)).await;
        let (status, message) = result.expect_err("broken source should fail");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("settings store unavailable"));
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = super::ValidateResponse {
            is_valid: true,
            failed_field_index: None,
            message: None,
            matched_keyword: None,
        };
        let value = serde_json::to_value(response).expect("response should serialize");
        assert_eq!(
            value,
            json!({
                "isValid": true,
                "failedFieldIndex": null,
                "message": null,
                "matchedKeyword": null
            })
        );
    }
}
