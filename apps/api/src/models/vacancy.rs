use serde::{Deserialize, Serialize};

use crate::matching::skills::{deserialize_skills, SkillSpec};
use crate::models::lenient::{f64_or_none, i64_or_none, string_or_none};

/// A vacancy as supplied by the vacancy store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancyListing {
    /// Opaque store identifier, echoed back when ranking.
    #[serde(deserialize_with = "i64_or_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "string_or_none")]
    pub title: Option<String>,
    /// Offered monthly pay in local currency units.
    #[serde(deserialize_with = "f64_or_none")]
    pub payrate_local_currency: Option<f64>,
    #[serde(deserialize_with = "string_or_none")]
    pub position: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub qualification_level: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub employment_type: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub work_format: Option<String>,
    /// A city, a region name, or a world sentinel.
    #[serde(deserialize_with = "string_or_none")]
    pub work_place: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub english_level: Option<String>,
    #[serde(deserialize_with = "deserialize_skills")]
    pub required_skills: Vec<SkillSpec>,
}

impl VacancyListing {
    /// Required skills (priority above zero), first occurrence of each name.
    pub fn scored_skills(&self) -> Vec<&SkillSpec> {
        let mut seen = std::collections::HashSet::new();
        self.required_skills
            .iter()
            .filter(|skill| skill.is_required())
            .filter(|skill| seen.insert(skill.name.as_str()))
            .collect()
    }
}
