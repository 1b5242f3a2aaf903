//! Axum route handlers for the Compatibility API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::config::ScoringConfig;
use crate::matching::ranking::{rank_vacancies, RankOptions, RankedVacancy};
use crate::matching::scorer::MatchResult;
use crate::matching::skills::{parse_skill_list, SkillSpec};
use crate::models::candidate::CandidateProfile;
use crate::models::vacancy::VacancyListing;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    pub candidate: CandidateProfile,
    pub vacancy: VacancyListing,
}

#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub result: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub vacancies: Vec<VacancyListing>,
    pub min_score: Option<u8>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<RankedVacancy>,
    pub total_scored: usize,
}

#[derive(Debug, Deserialize)]
pub struct ParseSkillsRequest {
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct ParseSkillsResponse {
    pub skills: Vec<SkillSpec>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/compatibility
///
/// Scores one candidate profile against one vacancy.
pub async fn handle_compatibility(
    State(state): State<AppState>,
    Json(request): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityResponse>, AppError> {
    let result = state.scorer.score(&request.candidate, &request.vacancy);

    debug!(
        vacancy_id = ?request.vacancy.id,
        matched_fields = result.matched_field_count(),
        matched_skills = result.matched_skill_names.len(),
        score = result.score_percent,
        "Scored compatibility"
    );

    Ok(Json(CompatibilityResponse { result }))
}

/// POST /api/v1/compatibility/rank
///
/// Scores a vacancy list for one candidate, best match first.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.min_score.is_some_and(|min| min > 100) {
        return Err(AppError::Validation(
            "min_score must be between 0 and 100".to_string(),
        ));
    }
    if request.limit == Some(0) {
        return Err(AppError::Validation(
            "limit must be greater than zero".to_string(),
        ));
    }

    let options = RankOptions {
        min_score: request.min_score,
        limit: request.limit,
    };
    let ranked = rank_vacancies(
        state.scorer.as_ref(),
        &request.candidate,
        &request.vacancies,
        options,
    );

    info!(
        scored = request.vacancies.len(),
        returned = ranked.len(),
        "Ranked vacancies"
    );

    Ok(Json(RankResponse {
        ranked,
        total_scored: request.vacancies.len(),
    }))
}

/// POST /api/v1/skills/parse
///
/// Previews how a skill string is interpreted.
pub async fn handle_parse_skills(
    Json(request): Json<ParseSkillsRequest>,
) -> Result<Json<ParseSkillsResponse>, AppError> {
    Ok(Json(ParseSkillsResponse {
        skills: parse_skill_list(&request.skills),
    }))
}

/// GET /api/v1/compatibility/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<ScoringConfig> {
    Json(state.scorer.config().clone())
}
