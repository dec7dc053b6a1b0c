//! Scheduled teaching and learning sessions.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::display::format_session_when_in;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Completed,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Completed => "Completed",
        }
    }
}

/// Whether the user is the teacher or the learner in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Teaching,
    Learning,
}

impl SessionRole {
    pub fn label(self) -> &'static str {
        match self {
            SessionRole::Teaching => "Teaching",
            SessionRole::Learning => "Learning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSession {
    pub id: String,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: SessionStatus,
    pub participant: Participant,
    pub role: SessionRole,
}

impl SkillSession {
    pub fn when_line_in<Tz: TimeZone>(&self, tz: &Tz) -> String {
        format_session_when_in(self.starts_at, tz)
    }

    pub fn duration_line(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }
}

/// Upcoming sessions, soonest first.
pub fn upcoming(sessions: &[SkillSession]) -> Vec<&SkillSession> {
    let mut out: Vec<&SkillSession> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Upcoming)
        .collect();
    out.sort_by_key(|s| s.starts_at);
    out
}

/// Completed sessions, most recent first.
pub fn past(sessions: &[SkillSession]) -> Vec<&SkillSession> {
    let mut out: Vec<&SkillSession> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .collect();
    out.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
    out
}
