//! Static marketplace data: the profile, conversations, matches, sessions
//! and skill catalog the app starts from.
//!
//! A default data set ships with the crate (`data/seed.json`). A file with
//! the same shape can be supplied instead.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::conversations::{ConversationSummary, Message};
use crate::matches::{SkillMatch, MAX_MATCH_SCORE};
use crate::profile::Profile;
use crate::sessions::SkillSession;
use crate::skills::SkillCatalog;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Starting time-bank balance when the data set does not name one.
pub const DEFAULT_TIME_BALANCE_HOURS: u32 = 5;

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Json(serde_json::Error),
    ScoreOutOfRange { match_id: String, score: u8 },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "io error: {e}"),
            SeedError::Json(e) => write!(f, "invalid seed data: {e}"),
            SeedError::ScoreOutOfRange { match_id, score } => write!(
                f,
                "invalid seed data: match {match_id} has score {score} (max {MAX_MATCH_SCORE})"
            ),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<std::io::Error> for SeedError {
    fn from(e: std::io::Error) -> Self {
        SeedError::Io(e)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Json(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub profile: Profile,
    #[serde(default = "default_time_balance")]
    pub time_balance_hours: u32,
    #[serde(default)]
    pub skill_catalog: SkillCatalog,
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
    /// Message threads keyed by peer id.
    #[serde(default)]
    pub threads: HashMap<String, Vec<Message>>,
    #[serde(default)]
    pub matches: Vec<SkillMatch>,
    #[serde(default)]
    pub sessions: Vec<SkillSession>,
}

fn default_time_balance() -> u32 {
    DEFAULT_TIME_BALANCE_HOURS
}

impl SeedData {
    /// The data set bundled with the crate.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(raw)?;
        if let Some(m) = seed.matches.iter().find(|m| m.match_score > MAX_MATCH_SCORE) {
            return Err(SeedError::ScoreOutOfRange {
                match_id: m.id.clone(),
                score: m.match_score,
            });
        }
        Ok(seed)
    }
}
