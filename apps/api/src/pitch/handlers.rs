//! Axum route handlers for the pitch workflow API.
//!
//! Every step handler returns the refreshed session view so front ends
//! always render from one shape.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::directory::JournalistProfile;
use crate::errors::AppError;
use crate::pitch::workflow::{run_match, run_pitch, run_select, PitchSession, WorkflowState};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub story_idea: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    pub story_idea: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct JournalistsResponse {
    pub journalists: Vec<JournalistProfile>,
}

/// The single session shape every session endpoint returns.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: WorkflowState,
    pub story_idea: String,
    pub suggested: Vec<String>,
    pub selected: Option<String>,
    pub pitch: Option<String>,
    pub evaluation: Option<String>,
    pub suggestions: Option<String>,
}

impl From<&PitchSession> for SessionView {
    fn from(session: &PitchSession) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            state: session.state,
            story_idea: session.story_idea.clone(),
            suggested: session.suggested.clone(),
            selected: session.selected.as_ref().map(|p| p.name.clone()),
            pitch: session.pitch.clone(),
            evaluation: session.evaluation.clone(),
            suggestions: session.suggestions.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/journalists
///
/// The full roster, for the selection control in the front end.
pub async fn handle_list_journalists(
    State(state): State<AppState>,
) -> Result<Json<JournalistsResponse>, AppError> {
    Ok(Json(JournalistsResponse {
        journalists: state.directory.profiles().to_vec(),
    }))
}

/// POST /api/v1/sessions
///
/// Creates a workflow session. The story idea may arrive now or via PATCH.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = PitchSession::new(request.story_idea.unwrap_or_default());
    let view = SessionView::from(&session);
    state.sessions.insert(session).await;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = session_or_404(&state, id).await?;
    let session = session.lock().await;
    Ok(Json(SessionView::from(&*session)))
}

/// PATCH /api/v1/sessions/:id
///
/// Updates the story idea. Produced texts are untouched — score and suggest
/// consume the pitch text, not the idea, so completed runs stay coherent.
pub async fn handle_update_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = session_or_404(&state, id).await?;
    let mut session = session.lock().await;
    session.story_idea = request.story_idea;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/match
///
/// Runs the journalist-matching step and adopts the top suggestion.
pub async fn handle_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = session_or_404(&state, id).await?;
    let mut session = session.lock().await;
    run_match(
        state.llm.as_ref(),
        &state.config.openai_model,
        &state.directory,
        &mut session,
    )
    .await?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/select
///
/// Explicitly selects a journalist by exact roster name.
pub async fn handle_select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let session = session_or_404(&state, id).await?;
    let mut session = session.lock().await;
    run_select(&state.directory, &mut session, &request.name)?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/generate
///
/// Runs generate → score → suggest for the selected journalist. On a
/// provider failure the error body names the failed step; texts produced
/// before the failure remain readable via GET.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = session_or_404(&state, id).await?;
    let mut session = session.lock().await;
    run_pitch(state.llm.as_ref(), &state.config.openai_model, &mut session).await?;
    Ok(Json(SessionView::from(&*session)))
}

async fn session_or_404(
    state: &AppState,
    id: Uuid,
) -> Result<Arc<Mutex<PitchSession>>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}
