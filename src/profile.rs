//! The signed-in user's profile and skill lists.

use serde::{Deserialize, Serialize};

use crate::skills;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    EmptyField(&'static str),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::EmptyField(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ProfileError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub teach_skills: Vec<String>,
    #[serde(default)]
    pub learn_skills: Vec<String>,
}

/// Changes from the "Profile Information" form. Missing fields are left as
/// they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Which of the two skill lists an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSide {
    Teach,
    Learn,
}

/// Replacement skill lists from the "Skills" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillsUpdate {
    #[serde(default)]
    pub teach_skills: Vec<String>,
    #[serde(default)]
    pub learn_skills: Vec<String>,
}

impl Profile {
    /// Apply a profile form. Nothing changes unless every field is valid.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), ProfileError> {
        let full_name = required(update.full_name, "full name")?;
        let username = required(update.username, "username")?;

        if let Some(v) = full_name {
            self.full_name = v;
        }
        if let Some(v) = username {
            self.username = v;
        }
        if let Some(v) = update.bio {
            self.bio = v.trim().to_string();
        }
        if let Some(v) = update.location {
            self.location = v.trim().to_string();
        }
        Ok(())
    }

    pub fn set_skills(&mut self, update: SkillsUpdate) {
        self.teach_skills = normalize_skills(update.teach_skills);
        self.learn_skills = normalize_skills(update.learn_skills);
    }

    /// Add `skill` to one list, or take it off if it is already there.
    /// Returns whether the skill is listed afterwards.
    pub fn toggle_skill(&mut self, side: SkillSide, skill: &str) -> Result<bool, ProfileError> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(ProfileError::EmptyField("skill"));
        }
        Ok(skills::toggle_skill(self.skills_mut(side), skill))
    }

    /// Take `skill` off one list; returns whether it was listed.
    pub fn remove_skill(&mut self, side: SkillSide, skill: &str) -> bool {
        skills::remove_skill(self.skills_mut(side), skill.trim())
    }

    fn skills_mut(&mut self, side: SkillSide) -> &mut Vec<String> {
        match side {
            SkillSide::Teach => &mut self.teach_skills,
            SkillSide::Learn => &mut self.learn_skills,
        }
    }

    pub fn teaches(&self, skill: &str) -> bool {
        self.teach_skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    pub fn wants_to_learn(&self, skill: &str) -> bool {
        self.learn_skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<Option<String>, ProfileError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(ProfileError::EmptyField(field)),
        other => Ok(other),
    }
}

/// Trim, drop blanks and drop repeats (first occurrence wins).
fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Profile {
        Profile {
            full_name: "John Doe".to_string(),
            username: "johndoe".to_string(),
            bio: String::new(),
            location: "New York, NY".to_string(),
            teach_skills: vec!["Web Development".to_string()],
            learn_skills: vec!["Photography".to_string()],
        }
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut p = john();
        p.apply(ProfileUpdate {
            bio: Some("  I teach React.  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(p.bio, "I teach React.");
        assert_eq!(p.full_name, "John Doe");
        assert_eq!(p.location, "New York, NY");
    }

    #[test]
    fn blank_name_is_rejected_atomically() {
        let mut p = john();
        let err = p
            .apply(ProfileUpdate {
                full_name: Some("   ".to_string()),
                location: Some("Boston, MA".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ProfileError::EmptyField("full name"));
        assert_eq!(p, john());
    }

    #[test]
    fn skills_are_normalized() {
        let mut p = john();
        p.set_skills(SkillsUpdate {
            teach_skills: vec![
                " React ".to_string(),
                "".to_string(),
                "React".to_string(),
                "Yoga".to_string(),
            ],
            learn_skills: vec!["Guitar".to_string()],
        });
        assert_eq!(p.teach_skills, vec!["React", "Yoga"]);
        assert!(p.teaches("yoga"));
        assert!(p.wants_to_learn("Guitar"));
        assert!(!p.wants_to_learn("Photography"));
    }

    #[test]
    fn toggle_and_remove_edit_one_list() {
        let mut p = john();
        assert_eq!(p.toggle_skill(SkillSide::Learn, " Guitar "), Ok(true));
        assert_eq!(p.learn_skills, vec!["Photography", "Guitar"]);
        assert_eq!(p.teach_skills, vec!["Web Development"]);

        assert_eq!(p.toggle_skill(SkillSide::Teach, "Web Development"), Ok(false));
        assert!(p.teach_skills.is_empty());

        assert_eq!(
            p.toggle_skill(SkillSide::Teach, "  "),
            Err(ProfileError::EmptyField("skill"))
        );
        assert!(p.remove_skill(SkillSide::Learn, "Photography"));
        assert!(!p.remove_skill(SkillSide::Learn, "Photography"));
        assert_eq!(p.learn_skills, vec!["Guitar"]);
    }
}
