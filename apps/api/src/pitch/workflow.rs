//! Pitch workflow — orchestrates the match, generate, score, and suggest steps.
//!
//! Flow: optional match (rank journalists against the story idea) → select →
//! generate → score → suggest. The three post-selection steps run in strict
//! sequence within one run; score and suggest consume the generated pitch
//! text verbatim. A failing step halts the run: the session state stays at
//! that step and every output produced earlier in the run is kept.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::directory::{JournalistDirectory, JournalistProfile};
use crate::errors::AppError;
use crate::llm_client::ChatCompleter;
use crate::pitch::matching::parse_suggested_names;
use crate::pitch::prompts::{
    build_generate_prompt, build_match_prompt, build_score_prompt, build_suggest_prompt,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Where a session's current run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Idle,
    Matching,
    Selected,
    Generating,
    Scoring,
    Suggesting,
    Done,
}

/// One user's workflow state for the lifetime of the process. Holds the
/// story idea, the active journalist, and the texts produced so far.
#[derive(Debug, Clone)]
pub struct PitchSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub story_idea: String,
    pub state: WorkflowState,
    /// Names parsed from the latest match step, best match first.
    pub suggested: Vec<String>,
    pub selected: Option<JournalistProfile>,
    pub pitch: Option<String>,
    pub evaluation: Option<String>,
    pub suggestions: Option<String>,
}

impl PitchSession {
    pub fn new(story_idea: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            story_idea,
            state: WorkflowState::Idle,
            suggested: Vec::new(),
            selected: None,
            pitch: None,
            evaluation: None,
            suggestions: None,
        }
    }

    fn has_story_idea(&self) -> bool {
        !self.story_idea.trim().is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Workflow steps
// ────────────────────────────────────────────────────────────────────────────

/// Match step: ranks roster journalists against the story idea and adopts
/// the top suggestion as the active selection.
///
/// An empty story idea blocks the step before any request is issued. An
/// empty parse result drops the session back to `Idle` so the user selects
/// manually. A top suggestion missing from the roster propagates as
/// not-found with the suggestion list left visible on the session.
pub async fn run_match(
    llm: &dyn ChatCompleter,
    model: &str,
    directory: &JournalistDirectory,
    session: &mut PitchSession,
) -> Result<(), AppError> {
    if !session.has_story_idea() {
        return Err(AppError::EmptyInput(
            "Enter a story idea before requesting journalist suggestions".to_string(),
        ));
    }

    session.state = WorkflowState::Matching;

    let prompt = build_match_prompt(&session.story_idea, directory.profiles());
    let raw = llm
        .complete(&prompt, model)
        .await
        .map_err(|source| AppError::Provider {
            step: "match",
            source,
        })?;

    session.suggested = parse_suggested_names(&raw);
    info!(
        "Match step produced {} candidate journalists for session {}",
        session.suggested.len(),
        session.id
    );

    match session.suggested.first() {
        Some(first) => {
            let profile = directory.lookup(first).ok_or_else(|| {
                AppError::NotFound(format!("Suggested journalist '{first}' is not in the roster"))
            })?;
            session.selected = Some(profile.clone());
            session.state = WorkflowState::Selected;
        }
        None => {
            // nothing usable came back; the user must pick by hand
            session.state = WorkflowState::Idle;
        }
    }

    Ok(())
}

/// Explicit selection: resolves a journalist name against the roster.
/// Issues no completion requests.
pub fn run_select(
    directory: &JournalistDirectory,
    session: &mut PitchSession,
    name: &str,
) -> Result<(), AppError> {
    let profile = directory
        .lookup(name)
        .ok_or_else(|| AppError::NotFound(format!("Journalist '{name}' is not in the roster")))?;

    info!("Session {} selected journalist {}", session.id, profile.name);
    session.selected = Some(profile.clone());
    session.state = WorkflowState::Selected;
    Ok(())
}

/// Generate → score → suggest, in strict sequence.
///
/// Requires a selected journalist and a non-empty story idea; otherwise no
/// request is issued and the session state is untouched. Outputs from any
/// previous run are cleared first so a session never mixes texts from two
/// runs.
pub async fn run_pitch(
    llm: &dyn ChatCompleter,
    model: &str,
    session: &mut PitchSession,
) -> Result<(), AppError> {
    let Some(profile) = session.selected.clone() else {
        return Err(AppError::EmptyInput(
            "Select a journalist before generating a pitch".to_string(),
        ));
    };
    if !session.has_story_idea() {
        return Err(AppError::EmptyInput(
            "Enter a story idea before generating a pitch".to_string(),
        ));
    }

    session.pitch = None;
    session.evaluation = None;
    session.suggestions = None;

    session.state = WorkflowState::Generating;
    let pitch = llm
        .complete(&build_generate_prompt(&session.story_idea, &profile), model)
        .await
        .map_err(|source| AppError::Provider {
            step: "generate",
            source,
        })?;
    info!(
        "Generated pitch to {} for session {} ({} chars)",
        profile.name,
        session.id,
        pitch.len()
    );
    session.pitch = Some(pitch.clone());

    session.state = WorkflowState::Scoring;
    let evaluation = llm
        .complete(&build_score_prompt(&pitch), model)
        .await
        .map_err(|source| AppError::Provider {
            step: "score",
            source,
        })?;
    session.evaluation = Some(evaluation);

    session.state = WorkflowState::Suggesting;
    let suggestions = llm
        .complete(&build_suggest_prompt(&pitch), model)
        .await
        .map_err(|source| AppError::Provider {
            step: "suggest",
            source,
        })?;
    session.suggestions = Some(suggestions);

    session.state = WorkflowState::Done;
    info!("Pitch run complete for session {}", session.id);
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
