//! Skill list parsing — turns `"Figma 4, UI/UX 3"` into structured entries.
//!
//! The same format carries candidate self-ratings and vacancy minimum
//! priorities. Parsing is permissive: it never fails, bad tokens just
//! degrade to priority 0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient::value_as_i64;

/// A single skill with its numeric suffix.
///
/// On the candidate side `priority` is the self-rated level (1–5); on the
/// vacancy side it is the minimum priority gate, where 0 means informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSpec {
    /// Trimmed, lowercased name used for comparisons.
    pub name: String,
    /// Name as written in the source text.
    pub label: String,
    pub priority: u32,
}

impl SkillSpec {
    pub fn new(label: &str, priority: u32) -> Self {
        let label = label.trim().to_string();
        Self {
            name: normalize_skill_name(&label),
            label,
            priority,
        }
    }

    /// Vacancy skills with priority 0 are listed for information only.
    pub fn is_required(&self) -> bool {
        self.priority > 0
    }
}

pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parses a comma-separated list of `"<name> <priority>"` entries.
///
/// The last whitespace-separated token is the priority when it is an
/// integer; everything before it is the name, so multi-word names such as
/// `"Product design 3"` survive.
pub fn parse_skill_list(input: &str) -> Vec<SkillSpec> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_skill_entry)
        .collect()
}

fn parse_skill_entry(entry: &str) -> SkillSpec {
    let Some((head, last)) = entry.rsplit_once(char::is_whitespace) else {
        return SkillSpec::new(entry, 0);
    };

    match parse_priority(last) {
        Some(priority) if !head.trim().is_empty() => SkillSpec::new(head, priority),
        _ => SkillSpec::new(entry, 0),
    }
}

fn parse_priority(token: &str) -> Option<u32> {
    token.parse::<i64>().ok().map(clamp_priority)
}

/// Negative values clamp to 0, oversized values saturate.
fn clamp_priority(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format: a skill string or an array of strings / {name, level} objects
// ────────────────────────────────────────────────────────────────────────────

/// Serde adapter for skill fields. Accepts a skill string or an array whose
/// items are skill strings or `{name, priority|level}` objects. Items of any
/// other shape are skipped; a non-string, non-array value reads as empty.
pub fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<SkillSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => parse_skill_list(&text),
        Value::Array(items) => items.iter().flat_map(skill_item).collect(),
        _ => Vec::new(),
    })
}

fn skill_item(item: &Value) -> Vec<SkillSpec> {
    match item {
        Value::String(text) => parse_skill_list(text),
        Value::Object(fields) => {
            let Some(name) = fields
                .get("name")
                .and_then(Value::as_str)
                .filter(|n| !n.trim().is_empty())
            else {
                return Vec::new();
            };
            let priority = fields
                .get("priority")
                .or_else(|| fields.get("level"))
                .and_then(value_as_i64)
                .map_or(0, clamp_priority);
            vec![SkillSpec::new(name, priority)]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(skills: &[SkillSpec]) -> Vec<(&str, u32)> {
        skills.iter().map(|s| (s.name.as_str(), s.priority)).collect()
    }

    #[test]
    fn test_parses_name_priority_pairs() {
        let skills = parse_skill_list("Figma 4, UI/UX 3");
        assert_eq!(pairs(&skills), vec![("figma", 4), ("ui/ux", 3)]);
        assert_eq!(skills[1].label, "UI/UX");
    }

    #[test]
    fn test_missing_priority_defaults_to_zero() {
        assert_eq!(pairs(&parse_skill_list("Testing")), vec![("testing", 0)]);
    }

    #[test]
    fn test_multi_word_name_keeps_all_but_last_token() {
        let skills = parse_skill_list("Product design 3, Adobe Photoshop 4");
        assert_eq!(
            pairs(&skills),
            vec![("product design", 3), ("adobe photoshop", 4)]
        );
    }

    #[test]
    fn test_non_numeric_tail_is_part_of_name() {
        let skills = parse_skill_list("Responsive design");
        assert_eq!(pairs(&skills), vec![("responsive design", 0)]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list("   ").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }

    #[test]
    fn test_cyrillic_names_are_lowercased() {
        let skills = parse_skill_list("Тестування 2, Дослідження користувачів 2");
        assert_eq!(
            pairs(&skills),
            vec![("тестування", 2), ("дослідження користувачів", 2)]
        );
    }

    #[test]
    fn test_tolerates_missing_space_after_comma() {
        let skills = parse_skill_list("Figma 4,Wireframes 1");
        assert_eq!(pairs(&skills), vec![("figma", 4), ("wireframes", 1)]);
    }

    #[test]
    fn test_negative_priority_clamps_to_zero() {
        assert_eq!(pairs(&parse_skill_list("Figma -2")), vec![("figma", 0)]);
    }

    #[test]
    fn test_lone_number_is_a_name() {
        assert_eq!(pairs(&parse_skill_list("3")), vec![("3", 0)]);
    }

    #[test]
    fn test_is_required_only_above_zero() {
        assert!(SkillSpec::new("Figma", 1).is_required());
        assert!(!SkillSpec::new("Figma", 0).is_required());
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_skills")]
        skills: Vec<SkillSpec>,
    }

    #[test]
    fn test_deserializes_string_form() {
        let holder: Holder = serde_json::from_str(r#"{"skills": "Figma 4, UI/UX 3"}"#).unwrap();
        assert_eq!(pairs(&holder.skills), vec![("figma", 4), ("ui/ux", 3)]);
    }

    #[test]
    fn test_deserializes_object_list_with_level_alias() {
        let holder: Holder = serde_json::from_str(
            r#"{"skills": [{"name": "Figma", "level": 4}, {"name": "Wireframes", "priority": 1}, {"name": "Notes"}]}"#,
        )
        .unwrap();
        assert_eq!(
            pairs(&holder.skills),
            vec![("figma", 4), ("wireframes", 1), ("notes", 0)]
        );
    }

    #[test]
    fn test_object_priority_clamps_like_string_form() {
        let holder: Holder = serde_json::from_str(
            r#"{"skills": [{"name": "Figma", "priority": -1}, {"name": "Sketch", "level": "3"}]}"#,
        )
        .unwrap();
        assert_eq!(pairs(&holder.skills), vec![("figma", 0), ("sketch", 3)]);
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let holder: Holder = serde_json::from_str(
            r#"{"skills": ["Figma 4", null, 7, {"priority": 2}, {"name": "UI/UX", "priority": "high"}]}"#,
        )
        .unwrap();
        assert_eq!(pairs(&holder.skills), vec![("figma", 4), ("ui/ux", 0)]);
    }

    #[test]
    fn test_wrongly_typed_field_reads_as_empty() {
        let holder: Holder = serde_json::from_str(r#"{"skills": 12}"#).unwrap();
        assert!(holder.skills.is_empty());
    }

    #[test]
    fn test_deserializes_null_and_missing_as_empty() {
        let holder: Holder = serde_json::from_str(r#"{"skills": null}"#).unwrap();
        assert!(holder.skills.is_empty());
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.skills.is_empty());
    }
}
