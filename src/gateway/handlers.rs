use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::{error, info};

use super::AppState;
use crate::consts::SERVER_ERROR_MESSAGE;
use crate::prompts::build_review_prompt;
use crate::protocol::{ReviewRequest, ReviewResponse};

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "critic",
        "model": state.reviewer.model(),
    }))
}

/// POST /api/code-review
///
/// The reviewer's text comes back verbatim. Any failure, including an
/// unreadable body, becomes the same 500 so callers learn nothing about
/// the cause.
pub async fn code_review(
    State(state): State<AppState>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> (StatusCode, Json<ReviewResponse>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!(%rejection, "unreadable review request");
            return server_error();
        }
    };

    let prompt = build_review_prompt(&request);

    match state.reviewer.review(&prompt).await {
        Ok(review) => {
            match review.usage {
                Some(usage) => info!(
                    language = %request.language,
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    total_tokens = usage.total(),
                    "review complete"
                ),
                None => info!(language = %request.language, "review complete"),
            }
            (
                StatusCode::OK,
                Json(ReviewResponse::Feedback {
                    feedback: review.text,
                }),
            )
        }
        Err(e) => {
            error!(language = %request.language, error = ?e, "review failed");
            server_error()
        }
    }
}

fn server_error() -> (StatusCode, Json<ReviewResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ReviewResponse::Error {
            error: SERVER_ERROR_MESSAGE.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::reviewer::mock::MockReviewer;

    fn state(reviewer: MockReviewer) -> (AppState, Arc<MockReviewer>) {
        let reviewer = Arc::new(reviewer);
        (AppState::new(reviewer.clone()), reviewer)
    }

    fn request(code: &str, language: &str) -> ReviewRequest {
        ReviewRequest {
            code: code.to_string(),
            language: language.to_string(),
        }
    }

    #[tokio::test]
    async fn success_returns_feedback_verbatim() {
        let (state, reviewer) = state(MockReviewer::replying("  Use f-strings.\n"));

        let (status, Json(body)) =
            code_review(State(state), Ok(Json(request("print('hi')", "Python")))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            ReviewResponse::Feedback {
                feedback: "  Use f-strings.\n".to_string()
            }
        );
        let prompts = reviewer.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("print('hi')"));
        assert!(prompts[0].contains("Python"));
    }

    #[tokio::test]
    async fn reviewer_error_is_generic_500() {
        let (state, _) = state(MockReviewer::failing("quota exceeded for key sk-123"));

        let (status, Json(body)) =
            code_review(State(state), Ok(Json(request("x = 1", "Python")))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            ReviewResponse::Error {
                error: SERVER_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn empty_fields_are_forwarded() {
        let (state, reviewer) = state(MockReviewer::replying("nothing to review"));

        let (status, _) = code_review(State(state), Ok(Json(request("", "")))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(reviewer.calls(), 1);
    }

    #[tokio::test]
    async fn health_reports_model() {
        let (state, _) = state(MockReviewer::new(vec![]));
        let Json(body) = health(State(state)).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model"], "mock");
    }
}
