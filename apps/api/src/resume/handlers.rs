//! Axum route handlers for the resume actions.
//!
//! Anonymous callers get `null` back and nothing is written or generated.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::models::resume::Resume;
use crate::resume::improve::improve_content;
use crate::resume::service::{get_resume, save_resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub current: String,
    #[serde(rename = "type")]
    pub section_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub content: String,
}

/// Props handed to the editor component on page load.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePageProps {
    pub initial_content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /resume
///
/// Read fresh on every request; empty content when signed out or nothing saved yet.
pub async fn handle_resume_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ResumePageProps>, AppError> {
    let resume = match user {
        Some(user) => get_resume(state.store.as_ref(), &user).await?,
        None => None,
    };

    Ok(Json(ResumePageProps {
        initial_content: resume.map(|r| r.content).unwrap_or_default(),
    }))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Option<Resume>>, AppError> {
    let Some(user) = user else {
        return Ok(Json(None));
    };

    let resume = get_resume(state.store.as_ref(), &user).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<Option<Resume>>, AppError> {
    let Some(user) = user else {
        return Ok(Json(None));
    };

    let resume = save_resume(
        state.store.as_ref(),
        &state.revalidator,
        &user,
        &request.content,
    )
    .await?;
    Ok(Json(Some(resume)))
}

/// POST /api/v1/resume/improve
///
/// Never fails because of the LLM: on provider error the original text comes back.
pub async fn handle_improve(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ImproveRequest>,
) -> Json<Option<ImproveResponse>> {
    let Some(user) = user else {
        return Json(None);
    };

    let content = improve_content(
        state.llm.as_ref(),
        &user,
        &request.current,
        &request.section_type,
    )
    .await;
    Json(Some(ImproveResponse { content }))
}
