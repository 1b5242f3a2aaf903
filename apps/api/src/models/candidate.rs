use serde::{Deserialize, Serialize};

use crate::matching::skills::{deserialize_skills, SkillSpec};
use crate::models::lenient::{bool_or_false, f64_or_none, string_or_none};
use crate::models::preferences::PreferenceSet;

/// A job seeker's profile as supplied by the profile store.
///
/// Every field is optional on the wire; a missing or wrongly typed value
/// only fails the field it feeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "string_or_none")]
    pub position: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub qualification_level: Option<String>,
    pub employment_type_preferences: PreferenceSet,
    pub work_format_preferences: PreferenceSet,
    #[serde(deserialize_with = "string_or_none")]
    pub city: Option<String>,
    #[serde(deserialize_with = "bool_or_false")]
    pub can_relocate: bool,
    #[serde(deserialize_with = "f64_or_none")]
    pub desired_monthly_pay_usd: Option<f64>,
    #[serde(deserialize_with = "string_or_none")]
    pub english_level: Option<String>,
    #[serde(deserialize_with = "deserialize_skills")]
    pub skills: Vec<SkillSpec>,
}
