//! Scoring configuration — every tunable of the compatibility rules.
//!
//! Loaded once at startup (see `crate::config`) and shared read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::preferences::normalize_token;

/// Default local-currency units per USD.
pub const DEFAULT_EXCHANGE_RATE: f64 = 38.0;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringConfigError {
    #[error("exchange_rate must be a positive finite number, got {0}")]
    InvalidExchangeRate(f64),

    #[error("at least one scalar field weight must be greater than zero")]
    ZeroScalarWeights,

    #[error("world sentinels must not be blank")]
    BlankWorldSentinel,
}

/// How candidate preference sets are tested against a vacancy value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceMatching {
    /// Set membership of the normalized value.
    #[default]
    Exact,
    /// Containment inside any preference token (legacy behaviour).
    Substring,
}

impl std::str::FromStr for PreferenceMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "substring" => Ok(Self::Substring),
            other => Err(format!("unknown preference matching mode '{other}'")),
        }
    }
}

/// Integer weight per scored dimension. All ones gives the plain
/// "matched fields / total fields" percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub salary: u32,
    pub position: u32,
    pub qualification: u32,
    pub work_format: u32,
    pub employment_type: u32,
    pub location: u32,
    pub english_level: u32,
    /// Applied to each required skill.
    pub skill: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            salary: 1,
            position: 1,
            qualification: 1,
            work_format: 1,
            employment_type: 1,
            location: 1,
            english_level: 1,
            skill: 1,
        }
    }
}

impl FieldWeights {
    pub fn scalar_sum(&self) -> u64 {
        [
            self.salary,
            self.position,
            self.qualification,
            self.work_format,
            self.employment_type,
            self.location,
            self.english_level,
        ]
        .iter()
        .map(|w| u64::from(*w))
        .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub exchange_rate: f64,
    /// Groups of employment types treated as the same value.
    pub employment_type_synonyms: Vec<Vec<String>>,
    /// Work place values meaning "no geographic restriction".
    pub world_sentinels: Vec<String>,
    /// Region (country) name → member cities.
    pub regions: BTreeMap<String, Vec<String>>,
    pub preference_matching: PreferenceMatching,
    pub weights: FieldWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let regions = BTreeMap::from([
            (
                "Україна".to_string(),
                to_strings(&["Київ", "Львів", "Харків", "Одеса", "Дніпро"]),
            ),
            (
                "Ukraine".to_string(),
                to_strings(&["Kyiv", "Lviv", "Kharkiv", "Odesa", "Dnipro"]),
            ),
        ]);

        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            employment_type_synonyms: vec![to_strings(&[
                "Неповна зайнятість",
                "Часткова зайнятість",
            ])],
            world_sentinels: to_strings(&["World", "Світ"]),
            regions,
            preference_matching: PreferenceMatching::Exact,
            weights: FieldWeights::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(ScoringConfigError::InvalidExchangeRate(self.exchange_rate));
        }
        if self.weights.scalar_sum() == 0 {
            return Err(ScoringConfigError::ZeroScalarWeights);
        }
        if self.world_sentinels.iter().any(|s| s.trim().is_empty()) {
            return Err(ScoringConfigError::BlankWorldSentinel);
        }
        Ok(())
    }

    /// Every normalized employment type equivalent to `value`, itself included.
    pub fn employment_type_equivalents(&self, value: &str) -> Vec<String> {
        let normalized = normalize_token(value);
        let mut out = vec![normalized.clone()];
        for group in &self.employment_type_synonyms {
            let members: Vec<String> = group.iter().map(|m| normalize_token(m)).collect();
            if members.contains(&normalized) {
                out.extend(members.into_iter().filter(|m| *m != normalized));
            }
        }
        out
    }

    pub fn is_world_sentinel(&self, work_place: &str) -> bool {
        self.world_sentinels
            .iter()
            .any(|s| same_place(s, work_place))
    }

    /// True when `work_place` names a configured region that lists `city`.
    pub fn region_contains(&self, work_place: &str, city: &str) -> bool {
        self.regions
            .iter()
            .filter(|(region, _)| same_place(region, work_place))
            .any(|(_, cities)| cities.iter().any(|c| same_place(c, city)))
    }
}

/// Place names compare trimmed and case-insensitively.
pub fn same_place(a: &str, b: &str) -> bool {
    normalize_token(a) == normalize_token(b)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
