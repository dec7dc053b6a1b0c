//! Headline numbers for the dashboard cards.

use serde::Serialize;

use crate::conversations::ConversationStore;
use crate::sessions::{SessionStatus, SkillSession};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Hours available to spend on learning. Taken from the data source;
    /// there is no ledger behind it.
    pub time_balance_hours: u32,
    pub match_count: usize,
    pub upcoming_sessions: usize,
    pub unread_messages: usize,
}

impl DashboardSummary {
    pub fn build(
        time_balance_hours: u32,
        match_count: usize,
        sessions: &[SkillSession],
        store: &ConversationStore,
    ) -> Self {
        Self {
            time_balance_hours,
            match_count,
            upcoming_sessions: sessions
                .iter()
                .filter(|s| s.status == SessionStatus::Upcoming)
                .count(),
            unread_messages: store.unread_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::seed::SeedData;
    use std::sync::Arc;

    #[test]
    fn builtin_dashboard() {
        let seed = SeedData::builtin().unwrap();
        let store =
            ConversationStore::new(seed.conversations, seed.threads, Arc::new(SystemClock))
                .unwrap();
        let summary = DashboardSummary::build(
            seed.time_balance_hours,
            seed.matches.len(),
            &seed.sessions,
            &store,
        );
        assert_eq!(
            summary,
            DashboardSummary {
                time_balance_hours: 5,
                match_count: 6,
                upcoming_sessions: 2,
                unread_messages: 1,
            }
        );
    }
}
