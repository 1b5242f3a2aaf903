//! Per-field match rules. Each rule is independent and total: a missing or
//! blank value on either side is simply "no match".

use serde::{Deserialize, Serialize};

use crate::matching::config::{same_place, PreferenceMatching, ScoringConfig};
use crate::models::candidate::CandidateProfile;
use crate::models::preferences::PreferenceSet;
use crate::models::vacancy::VacancyListing;

/// The seven scalar fields compared between a profile and a vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Salary,
    Position,
    Qualification,
    WorkFormat,
    EmploymentType,
    Location,
    EnglishLevel,
}

impl MatchField {
    pub const ALL: [MatchField; 7] = [
        MatchField::Salary,
        MatchField::Position,
        MatchField::Qualification,
        MatchField::WorkFormat,
        MatchField::EmploymentType,
        MatchField::Location,
        MatchField::EnglishLevel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchField::Salary => "salary",
            MatchField::Position => "position",
            MatchField::Qualification => "qualification",
            MatchField::WorkFormat => "workFormat",
            MatchField::EmploymentType => "employmentType",
            MatchField::Location => "location",
            MatchField::EnglishLevel => "englishLevel",
        }
    }

    pub fn weight(self, config: &ScoringConfig) -> u32 {
        let w = &config.weights;
        match self {
            MatchField::Salary => w.salary,
            MatchField::Position => w.position,
            MatchField::Qualification => w.qualification,
            MatchField::WorkFormat => w.work_format,
            MatchField::EmploymentType => w.employment_type,
            MatchField::Location => w.location,
            MatchField::EnglishLevel => w.english_level,
        }
    }

    pub fn evaluate(
        self,
        candidate: &CandidateProfile,
        vacancy: &VacancyListing,
        config: &ScoringConfig,
    ) -> bool {
        match self {
            MatchField::Salary => salary_matches(
                vacancy.payrate_local_currency,
                candidate.desired_monthly_pay_usd,
                config.exchange_rate,
            ),
            MatchField::Position => exact_matches(&vacancy.position, &candidate.position),
            MatchField::Qualification => {
                exact_matches(&vacancy.qualification_level, &candidate.qualification_level)
            }
            MatchField::WorkFormat => match present(&vacancy.work_format) {
                Some(format) => preference_matches(
                    &candidate.work_format_preferences,
                    format,
                    config.preference_matching,
                ),
                None => false,
            },
            MatchField::EmploymentType => match present(&vacancy.employment_type) {
                Some(kind) => config
                    .employment_type_equivalents(kind)
                    .iter()
                    .any(|equivalent| {
                        preference_matches(
                            &candidate.employment_type_preferences,
                            equivalent,
                            config.preference_matching,
                        )
                    }),
                None => false,
            },
            MatchField::Location => location_matches(candidate, vacancy, config),
            MatchField::EnglishLevel => {
                exact_matches(&vacancy.english_level, &candidate.english_level)
            }
        }
    }
}

/// Offered pay must cover the desired USD pay converted to local currency.
pub fn salary_matches(payrate: Option<f64>, desired_usd: Option<f64>, exchange_rate: f64) -> bool {
    match (payrate, desired_usd) {
        (Some(offered), Some(desired)) => offered >= desired * exchange_rate,
        _ => false,
    }
}

/// Case-sensitive equality; blank or missing on either side never matches.
pub fn exact_matches(vacancy_value: &Option<String>, candidate_value: &Option<String>) -> bool {
    match (present(vacancy_value), present(candidate_value)) {
        (Some(v), Some(c)) => v == c,
        _ => false,
    }
}

pub fn preference_matches(prefs: &PreferenceSet, value: &str, mode: PreferenceMatching) -> bool {
    match mode {
        PreferenceMatching::Exact => prefs.contains(value),
        PreferenceMatching::Substring => prefs.contains_substring(value),
    }
}

pub fn location_matches(
    candidate: &CandidateProfile,
    vacancy: &VacancyListing,
    config: &ScoringConfig,
) -> bool {
    let Some(work_place) = present(&vacancy.work_place) else {
        return false;
    };

    if config.is_world_sentinel(work_place) || candidate.can_relocate {
        return true;
    }

    match present(&candidate.city) {
        Some(city) => same_place(city, work_place) || config.region_contains(work_place, city),
        None => false,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
