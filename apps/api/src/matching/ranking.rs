//! Ranks a vacancy list for one candidate by compatibility.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::{CompatibilityScorer, MatchResult};
use crate::models::candidate::CandidateProfile;
use crate::models::vacancy::VacancyListing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedVacancy {
    /// Index of the vacancy in the input list.
    pub position: usize,
    pub id: Option<i64>,
    pub title: Option<String>,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    /// Drop vacancies scoring below this percentage.
    pub min_score: Option<u8>,
    /// Keep at most this many entries after sorting.
    pub limit: Option<usize>,
}

/// Scores every vacancy and sorts by score, highest first.
/// Equal scores keep their input order.
pub fn rank_vacancies(
    scorer: &dyn CompatibilityScorer,
    candidate: &CandidateProfile,
    vacancies: &[VacancyListing],
    options: RankOptions,
) -> Vec<RankedVacancy> {
    let mut ranked: Vec<RankedVacancy> = vacancies
        .iter()
        .enumerate()
        .map(|(position, vacancy)| RankedVacancy {
            position,
            id: vacancy.id,
            title: vacancy.title.clone(),
            result: scorer.score(candidate, vacancy),
        })
        .filter(|r| options.min_score.map_or(true, |min| r.result.score_percent >= min))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.result.score_percent.cmp(&a.result.score_percent));

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    ranked
}
