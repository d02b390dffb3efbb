//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::analyze;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, Preferences};
use crate::state::AppState;

/// Wire shape of an analysis request. Both fields are required; they are
/// optional here only so the handler can report absence as a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub user_preferences: Option<Preferences>,
}

/// POST /resume/analyze
///
/// Validates field presence, then runs the analyzer against the catalog.
/// Present-but-empty resume text is accepted — content is never inspected.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let (resume_text, preferences) = match (request.resume_text, request.user_preferences) {
        (Some(text), Some(prefs)) => (text, prefs),
        _ => {
            return Err(AppError::Validation(
                "resumeText and userPreferences are required.".to_string(),
            ))
        }
    };

    let result = analyze(&resume_text, &preferences, state.store.list());
    Ok(Json(result))
}
