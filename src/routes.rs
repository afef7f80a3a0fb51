use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use crate::quality::AssessRequest;
use crate::state::AppState;
use crate::translate::{TranslateError, TranslateRequest, TranslationResult};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate))
        .route("/api/assess", post(assess))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    state
        .router
        .route(&request)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn assess(State(state): State<AppState>, Json(request): Json<AssessRequest>) -> Json<Value> {
    let assessment = state.scorer.assess(&request.original, &request.translation);
    Json(json!(assessment))
}

/// Map router errors onto HTTP responses. Upstream variants collapse
/// into one generic message so provider detail never reaches the caller.
fn error_response(err: TranslateError) -> (StatusCode, Json<Value>) {
    match err {
        TranslateError::MissingParameters => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "missing parameters" })),
        ),
        TranslateError::UpstreamEmpty | TranslateError::Upstream(_) => {
            error!("translation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "translation failed" })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> AppState {
        let yaml = r#"
provider_config:
  base_url: "http://localhost:9"
  model: "test-model"
"#;
        AppState::new(serde_yaml::from_str::<Config>(yaml).unwrap())
    }

    #[tokio::test]
    async fn test_translate_rejects_missing_parameters() {
        let state = test_state();
        let request = TranslateRequest {
            text: String::new(),
            source_language: "tr".to_string(),
            target_language: "en".to_string(),
        };

        let (status, Json(body)) = translate(State(state), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing parameters");
    }

    #[tokio::test]
    async fn test_translate_short_word_fast_path() {
        let state = test_state();
        let request = TranslateRequest {
            text: "hi".to_string(),
            source_language: "en".to_string(),
            target_language: "tr".to_string(),
        };

        let Json(result) = translate(State(state), Json(request)).await.unwrap();
        assert_eq!(result.translated_text, "merhaba");
        assert!(result.is_short_text);
    }

    #[tokio::test]
    async fn test_translate_identity_short_circuit() {
        let state = test_state();
        let request = TranslateRequest {
            text: "merhaba dünya".to_string(),
            source_language: "tr".to_string(),
            target_language: "tr".to_string(),
        };

        let Json(result) = translate(State(state), Json(request)).await.unwrap();
        assert_eq!(result.translated_text, "merhaba dünya");
    }

    #[tokio::test]
    async fn test_assess_endpoint_scores_translation() {
        let state = test_state();
        let request = AssessRequest {
            original: "kim sen ve nasılsın".to_string(),
            translation: "who are you and how are you".to_string(),
        };

        let Json(body) = assess(State(state), Json(request)).await;
        assert_eq!(body["score"], 8);
        assert_eq!(body["feedback"][0], "questions should be in separate sentences");
    }

    #[test]
    fn test_upstream_errors_share_a_generic_body() {
        let (status, Json(body)) = error_response(TranslateError::UpstreamEmpty);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "translation failed");

        let (status, Json(body)) =
            error_response(TranslateError::Upstream(anyhow::anyhow!("socket reset")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        // Provider detail stays out of the response body
        assert_eq!(body["error"], "translation failed");
    }

    #[tokio::test]
    async fn test_flags_are_omitted_when_unset() {
        let state = test_state();
        let request = TranslateRequest {
            text: "merhaba dünya".to_string(),
            source_language: "tr".to_string(),
            target_language: "tr".to_string(),
        };

        let Json(result) = translate(State(state), Json(request)).await.unwrap();
        let body = serde_json::to_value(&result).unwrap();
        assert!(body.get("needsMoreText").is_none());
        assert!(body.get("isShortText").is_none());
        assert_eq!(body["translatedText"], "merhaba dünya");
    }
}
