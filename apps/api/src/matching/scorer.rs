//! Compatibility scoring — pluggable, trait-based scorer that measures a
//! candidate profile against a vacancy.
//!
//! Default: `RuleBasedScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn CompatibilityScorer>`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::matching::config::ScoringConfig;
use crate::matching::fields::MatchField;
use crate::models::candidate::CandidateProfile;
use crate::models::vacancy::VacancyListing;

pub const HIGHLIGHT_MATCH: &str = "highlight-match";
pub const HIGHLIGHT_NO_MATCH: &str = "no-match";

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Per-pair scoring outcome consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub field_matches: BTreeMap<MatchField, bool>,
    /// Required skill names the candidate has (normalized).
    pub matched_skill_names: BTreeSet<String>,
    /// Required skill names the candidate lacks (normalized).
    pub missing_skill_names: BTreeSet<String>,
    pub required_skill_count: usize,
    pub score_percent: u8, // 0 – 100
    pub scorer_backend: String,
}

impl MatchResult {
    pub fn is_match(&self, field: MatchField) -> bool {
        self.field_matches.get(&field).copied().unwrap_or(false)
    }

    pub fn matched_field_count(&self) -> usize {
        self.field_matches.values().filter(|m| **m).count()
    }

    /// CSS state for a displayed vacancy attribute.
    pub fn highlight_class(&self, field: MatchField) -> &'static str {
        if self.is_match(field) {
            HIGHLIGHT_MATCH
        } else {
            HIGHLIGHT_NO_MATCH
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers or
/// ranking. Implementations must be pure: no I/O, no mutation of inputs.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, vacancy: &VacancyListing) -> MatchResult;

    fn backend(&self) -> &'static str;

    fn config(&self) -> &ScoringConfig;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedScorer
// ────────────────────────────────────────────────────────────────────────────

/// Rule-based scorer.
///
/// Algorithm:
/// 1. Evaluate the seven scalar field rules (see `fields`).
/// 2. Required skills = vacancy skills with priority > 0; a skill matches when
///    the candidate lists the same normalized name (level is ignored).
/// 3. score = round_half_up(100 × matched weight / total weight), where every
///    scalar field and every required skill carries its configured weight.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    config: ScoringConfig,
}

impl RuleBasedScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl CompatibilityScorer for RuleBasedScorer {
    fn score(&self, candidate: &CandidateProfile, vacancy: &VacancyListing) -> MatchResult {
        compute_compatibility(candidate, vacancy, &self.config, self.backend())
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }

    fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_compatibility(
    candidate: &CandidateProfile,
    vacancy: &VacancyListing,
    config: &ScoringConfig,
    backend: &str,
) -> MatchResult {
    let weights = &config.weights;

    let mut field_matches = BTreeMap::new();
    let mut numerator = 0_u64;
    let mut denominator = 0_u64;

    for field in MatchField::ALL {
        let matched = field.evaluate(candidate, vacancy, config);
        let weight = u64::from(field.weight(config));
        denominator += weight;
        if matched {
            numerator += weight;
        }
        trace!(field = field.as_str(), matched, weight, "Field evaluated");
        field_matches.insert(field, matched);
    }

    let candidate_skills: BTreeSet<&str> =
        candidate.skills.iter().map(|s| s.name.as_str()).collect();

    let required = vacancy.scored_skills();
    let (matched_skill_names, missing_skill_names): (BTreeSet<String>, BTreeSet<String>) =
        required
            .iter()
            .map(|skill| skill.name.clone())
            .partition(|name| candidate_skills.contains(name.as_str()));

    let skill_weight = u64::from(weights.skill);
    numerator += skill_weight * matched_skill_names.len() as u64;
    denominator += skill_weight * required.len() as u64;

    let score_percent = percent_half_up(numerator, denominator);

    debug!(
        vacancy_id = ?vacancy.id,
        ?field_matches,
        matched_skills = ?matched_skill_names,
        numerator,
        denominator,
        score_percent,
        "Scored vacancy"
    );

    MatchResult {
        field_matches,
        matched_skill_names,
        missing_skill_names,
        required_skill_count: required.len(),
        score_percent,
        scorer_backend: backend.to_string(),
    }
}

/// `round(100 × num / den)` with halves rounded up, in integer arithmetic.
/// A zero denominator yields 0.
pub fn percent_half_up(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let pct = (200 * numerator.min(denominator) + denominator) / (2 * denominator);
    pct.min(100) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
