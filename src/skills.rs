//! Skill taxonomy and the selection rules of the skill picker.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// A category with only the skills that matched a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHits<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Category a skill is listed under (exact, case-insensitive match).
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)))
            .map(|c| c.name.as_str())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.category_of(skill).is_some()
    }

    /// Skills whose name contains `query`, grouped by category. Categories
    /// with no hits are dropped; an empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<CategoryHits<'_>> {
        let needle = query.trim().to_lowercase();
        self.categories
            .iter()
            .filter_map(|c| {
                let skills: Vec<&str> = c
                    .skills
                    .iter()
                    .map(String::as_str)
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .collect();
                (!skills.is_empty()).then_some(CategoryHits {
                    category: &c.name,
                    skills,
                })
            })
            .collect()
    }
}

/// Add `skill` if it is not selected yet, otherwise remove it.
/// Returns whether the skill is selected afterwards.
pub fn toggle_skill(selected: &mut Vec<String>, skill: &str) -> bool {
    if remove_skill(selected, skill) {
        false
    } else {
        selected.push(skill.to_string());
        true
    }
}

/// Remove `skill` from the selection; returns whether it was present.
pub fn remove_skill(selected: &mut Vec<String>, skill: &str) -> bool {
    let before = selected.len();
    selected.retain(|s| s != skill);
    selected.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(vec![
            SkillCategory {
                name: "Technology".to_string(),
                skills: vec!["Programming".to_string(), "Web Development".to_string()],
            },
            SkillCategory {
                name: "Music".to_string(),
                skills: vec!["Guitar".to_string(), "Piano".to_string()],
            },
        ])
    }

    #[test]
    fn finds_category() {
        let c = catalog();
        assert_eq!(c.category_of("Guitar"), Some("Music"));
        assert_eq!(c.category_of("web development"), Some("Technology"));
        assert_eq!(c.category_of("React"), None);
    }

    #[test]
    fn search_groups_hits() {
        let c = catalog();
        let hits = c.search("an");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Music");
        assert_eq!(hits[0].skills, vec!["Piano"]);

        assert_eq!(c.search("").len(), 2);
        assert!(c.search("zzz").is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = vec!["Piano".to_string()];
        assert!(toggle_skill(&mut selected, "Guitar"));
        assert_eq!(selected, vec!["Piano", "Guitar"]);
        assert!(!toggle_skill(&mut selected, "Piano"));
        assert_eq!(selected, vec!["Guitar"]);
        assert!(!remove_skill(&mut selected, "Drums"));
    }
}
