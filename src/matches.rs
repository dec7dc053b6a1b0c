//! Skill match records and the explore view's search and filters.
//!
//! A match pairs a skill the other person teaches with a skill they want to
//! learn. The `match_score` is carried as-is from the data source; nothing
//! here computes or adjusts it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::skills::SkillCatalog;

/// Scores run from 0 to this value.
pub const MAX_MATCH_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub field: &'static str,
    pub value: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.value)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchUser {
    pub name: String,
    pub avatar: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub id: String,
    pub user: MatchUser,
    pub teach_skill: String,
    pub learn_skill: String,
    pub match_score: u8,
}

impl SkillMatch {
    fn mentions(&self, needle: &str) -> bool {
        [
            &self.user.name,
            &self.user.location,
            &self.teach_skill,
            &self.learn_skill,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Which side of the exchange to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploreTab {
    #[default]
    All,
    /// People who want to learn something the user teaches.
    Teaching,
    /// People who teach something the user wants to learn.
    Learning,
}

impl FromStr for ExploreTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "teaching" => Ok(Self::Teaching),
            "learning" => Ok(Self::Learning),
            other => Err(ParseError {
                field: "tab",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Order of the data source.
    #[default]
    Listed,
    BestMatch,
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "listed" => Ok(Self::Listed),
            "match" | "best_match" => Ok(Self::BestMatch),
            other => Err(ParseError {
                field: "sort",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    pub search: Option<String>,
    pub tab: ExploreTab,
    pub categories: Vec<String>,
    pub sort: SortOrder,
}

/// Run the explore filters over `matches` for `profile`.
pub fn explore<'a>(
    matches: &'a [SkillMatch],
    profile: &Profile,
    catalog: &SkillCatalog,
    query: &MatchQuery,
) -> Vec<&'a SkillMatch> {
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let in_categories = |m: &SkillMatch| {
        query.categories.is_empty()
            || [&m.teach_skill, &m.learn_skill].iter().any(|skill| {
                catalog
                    .category_of(skill)
                    .is_some_and(|cat| query.categories.iter().any(|c| c == cat))
            })
    };

    let mut out: Vec<&SkillMatch> = matches
        .iter()
        .filter(|m| match query.tab {
            ExploreTab::All => true,
            ExploreTab::Teaching => profile.teaches(&m.learn_skill),
            ExploreTab::Learning => profile.wants_to_learn(&m.teach_skill),
        })
        .filter(|m| needle.as_deref().map_or(true, |n| m.mentions(n)))
        .filter(|m| in_categories(*m))
        .collect();

    if query.sort == SortOrder::BestMatch {
        out.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillCategory;

    fn m(id: &str, name: &str, teach: &str, learn: &str, score: u8) -> SkillMatch {
        SkillMatch {
            id: id.to_string(),
            user: MatchUser {
                name: name.to_string(),
                avatar: String::new(),
                location: "Austin, TX".to_string(),
            },
            teach_skill: teach.to_string(),
            learn_skill: learn.to_string(),
            match_score: score,
        }
    }

    fn fixtures() -> (Vec<SkillMatch>, Profile, SkillCatalog) {
        let matches = vec![
            m("1", "Jane", "Web Development", "Photography", 80),
            m("2", "Mike", "Spanish", "Guitar", 95),
            m("3", "Alex", "Photography", "Web Development", 72),
        ];
        let profile = Profile {
            full_name: "John".to_string(),
            username: "john".to_string(),
            teach_skills: vec!["Web Development".to_string()],
            learn_skills: vec!["Spanish".to_string(), "Photography".to_string()],
            ..Default::default()
        };
        let catalog = SkillCatalog::new(vec![
            SkillCategory {
                name: "Languages".to_string(),
                skills: vec!["Spanish".to_string()],
            },
            SkillCategory {
                name: "Arts & Crafts".to_string(),
                skills: vec!["Photography".to_string()],
            },
        ]);
        (matches, profile, catalog)
    }

    fn ids(found: &[&SkillMatch]) -> Vec<String> {
        found.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn tabs_follow_the_profile() {
        let (matches, profile, catalog) = fixtures();
        let teaching = MatchQuery {
            tab: ExploreTab::Teaching,
            ..Default::default()
        };
        assert_eq!(ids(&explore(&matches, &profile, &catalog, &teaching)), vec!["3"]);

        let learning = MatchQuery {
            tab: ExploreTab::Learning,
            ..Default::default()
        };
        assert_eq!(
            ids(&explore(&matches, &profile, &catalog, &learning)),
            vec!["2", "3"]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let (matches, profile, catalog) = fixtures();
        let q = MatchQuery {
            search: Some("  GUITAR ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&explore(&matches, &profile, &catalog, &q)), vec!["2"]);

        let q = MatchQuery {
            search: Some("austin".to_string()),
            ..Default::default()
        };
        assert_eq!(explore(&matches, &profile, &catalog, &q).len(), 3);
    }

    #[test]
    fn category_filter_uses_either_skill() {
        let (matches, profile, catalog) = fixtures();
        let q = MatchQuery {
            categories: vec!["Arts & Crafts".to_string()],
            ..Default::default()
        };
        assert_eq!(
            ids(&explore(&matches, &profile, &catalog, &q)),
            vec!["1", "3"]
        );
    }

    #[test]
    fn best_match_sorts_by_score() {
        let (matches, profile, catalog) = fixtures();
        let q = MatchQuery {
            sort: SortOrder::BestMatch,
            ..Default::default()
        };
        assert_eq!(
            ids(&explore(&matches, &profile, &catalog, &q)),
            vec!["2", "1", "3"]
        );
    }

    #[test]
    fn parses_query_enums() {
        assert_eq!("Teaching".parse::<ExploreTab>().unwrap(), ExploreTab::Teaching);
        assert_eq!("".parse::<ExploreTab>().unwrap(), ExploreTab::All);
        assert_eq!("match".parse::<SortOrder>().unwrap(), SortOrder::BestMatch);
        let err = "nearest".parse::<SortOrder>().unwrap_err();
        assert_eq!(err.to_string(), "invalid sort: nearest");
    }
}
