use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry};
use crate::AppState;

const MOOD_REQUIRED: &str = "Mood is required";

pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    let moods = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, mood, note, created_at FROM moods
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(AppError::store("Failed to fetch moods"))?;

    Ok(Json(moods))
}

pub async fn create_mood(
    State(state): State<AppState>,
    payload: Bytes,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let body = parse_create_request(&payload)?;
    tracing::debug!(mood = ?body.mood, note = ?body.note, "Incoming POST /api/moods");

    body.validate()
        .map_err(|errors| AppError::BadRequest(first_message(&errors)))?;
    let Some(mood) = body.mood.as_deref() else {
        return Err(AppError::BadRequest(MOOD_REQUIRED.into()));
    };

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO moods (mood, note) VALUES ($1, $2) RETURNING id",
    )
    .bind(mood)
    .bind(body.normalized_note())
    .fetch_one(&state.db)
    .await
    .map_err(AppError::store("Failed to save mood"))?;

    // Read back so the response carries store-assigned defaults.
    let entry = sqlx::query_as::<_, MoodEntry>(
        "SELECT id, mood, note, created_at FROM moods WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&state.db)
    .await
    .map_err(AppError::store("Failed to save mood"))?;

    tracing::info!(id = entry.id, mood = %entry.mood, "Mood saved");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// An empty or blank body is an empty object, so it fails on the missing mood
/// rather than as a parse error.
fn parse_create_request(payload: &[u8]) -> AppResult<CreateMoodRequest> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateMoodRequest::default());
    }
    serde_json::from_slice(payload).map_err(|e| {
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
    })
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_uses_custom_message() {
        let errors = CreateMoodRequest::default().validate().unwrap_err();
        assert_eq!(first_message(&errors), MOOD_REQUIRED);

        let errors = CreateMoodRequest::new("", None).validate().unwrap_err();
        assert_eq!(first_message(&errors), MOOD_REQUIRED);
    }

    #[test]
    fn test_blank_body_parses_as_empty_request() {
        for payload in [&b""[..], &b"  \n\t"[..]] {
            let req = parse_create_request(payload).unwrap();
            assert_eq!(req.mood, None);
            assert_eq!(first_message(&req.validate().unwrap_err()), MOOD_REQUIRED);
        }
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        let err = parse_create_request(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse the request body as JSON"));
    }
}
