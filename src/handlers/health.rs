use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{DbTestResponse, HealthResponse};
use crate::AppState;

/// Liveness only. Does not touch the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn db_test(State(state): State<AppState>) -> (StatusCode, Json<DbTestResponse>) {
    match sqlx::query_scalar::<_, i32>("SELECT 1 + 1 AS result")
        .fetch_one(&state.db)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(DbTestResponse {
                connected: true,
                result: Some(result),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "DB test error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbTestResponse {
                    connected: false,
                    result: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
