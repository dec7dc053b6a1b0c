//! Shared application state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auth::AuthSession;
use crate::clock::Clock;
use crate::conversations::{ConversationStore, StoreError};
use crate::matches::SkillMatch;
use crate::profile::Profile;
use crate::seed::SeedData;
use crate::sessions::SkillSession;
use crate::skills::SkillCatalog;

pub struct AppState {
    pub session: Option<AuthSession>,
    pub store: ConversationStore,
    pub profile: Profile,
    pub catalog: SkillCatalog,
    pub matches: Vec<SkillMatch>,
    pub sessions: Vec<SkillSession>,
    pub time_balance_hours: u32,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn from_seed(
        seed: SeedData,
        session: Option<AuthSession>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let store = ConversationStore::new(seed.conversations, seed.threads, Arc::clone(&clock))?;
        Ok(Self {
            session,
            store,
            profile: seed.profile,
            catalog: seed.skill_catalog,
            matches: seed.matches,
            sessions: seed.sessions,
            time_balance_hours: seed.time_balance_hours,
            clock,
        })
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }
}

pub type SharedState = Arc<Mutex<AppState>>;
