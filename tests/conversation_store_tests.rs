//! Integration tests for the conversation store over the bundled data set.
//!
//! Tests cover:
//! - Selecting an unread conversation and loading its seeded thread
//! - Sending into the selected conversation
//! - Unread bookkeeping across selection and incoming messages
//! - Starting a conversation from a match
//! - Message id uniqueness under a frozen clock

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use skillswap::clock::FixedClock;
use skillswap::conversations::{ConversationStore, Peer, StoreError, CURRENT_USER};
use skillswap::dashboard::DashboardSummary;
use skillswap::seed::SeedData;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 21, 12, 0, 0).unwrap()
}

fn seeded_store(clock: Arc<FixedClock>) -> (SeedData, ConversationStore) {
    let seed = SeedData::builtin().expect("bundled seed parses");
    let store = ConversationStore::new(seed.conversations.clone(), seed.threads.clone(), clock)
        .expect("bundled seed is consistent");
    (seed, store)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn select_then_send_on_unread_conversation() {
    let clock = Arc::new(FixedClock::new(noon()));
    let mut seed = SeedData::builtin().unwrap();
    let user1 = seed
        .conversations
        .iter_mut()
        .find(|c| c.peer.id == "user1")
        .unwrap();
    user1.is_read = false;
    let mut store = ConversationStore::new(seed.conversations, seed.threads, clock).unwrap();

    let thread = store.select_conversation("user1").unwrap();
    let ids: Vec<&str> = thread.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["msg1", "msg2", "msg3"]);
    assert!(store.conversation("user1").unwrap().is_read);

    let sent = store.send_message("ok").unwrap().clone();
    let thread = store.active_thread();
    assert_eq!(thread.len(), 4);
    assert_eq!(thread[3], sent);
    assert_eq!(sent.sender_id, CURRENT_USER);
    assert_eq!(sent.content, "ok");
    assert_eq!(sent.timestamp, noon());
    assert_eq!(store.conversation("user1").unwrap().last_message, "ok");
}

#[test]
fn selecting_each_peer_shows_its_thread_in_order() {
    let (seed, mut store) = seeded_store(Arc::new(FixedClock::new(noon())));
    for conv in &seed.conversations {
        let peer_id = conv.peer.id.as_str();
        let selected: Vec<String> = store
            .select_conversation(peer_id)
            .unwrap()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        let thread = store.active_thread();
        let expected: Vec<String> = seed.threads[peer_id].iter().map(|m| m.id.clone()).collect();

        assert_eq!(store.selected(), Some(peer_id));
        assert!(store.conversation(peer_id).unwrap().is_read);
        assert_eq!(selected, expected);
        assert_eq!(
            thread.iter().map(|m| m.id.clone()).collect::<Vec<_>>(),
            expected
        );
        assert!(
            thread.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "thread with {peer_id} is out of order"
        );
        assert!(thread
            .iter()
            .all(|m| m.sender_id == peer_id || m.sender_id == CURRENT_USER));
    }
}

#[test]
fn unread_count_tracks_selection_and_incoming() {
    let clock = Arc::new(FixedClock::new(noon()));
    let (_, mut store) = seeded_store(Arc::clone(&clock));
    assert_eq!(store.unread_count(), 1);

    store.select_conversation("user2").unwrap();
    assert_eq!(store.unread_count(), 0);

    clock.advance(Duration::minutes(3));
    let received = store
        .receive_message("user3", "Are we still on for Friday?")
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(received.timestamp, noon() + Duration::minutes(3));
    assert_eq!(store.unread_count(), 1);
    let user3 = store.conversation("user3").unwrap();
    assert!(store.shows_unread_badge(user3));
    assert_eq!(user3.last_message, "Are we still on for Friday?");

    // Messages into the open conversation never raise the count.
    store.receive_message("user2", "Thanks!").unwrap();
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn unknown_peer_leaves_state_alone() {
    let (_, mut store) = seeded_store(Arc::new(FixedClock::new(noon())));
    store.select_conversation("user3").unwrap();
    let before = store.conversations().to_vec();

    assert_eq!(
        store.select_conversation("user9").unwrap_err(),
        StoreError::UnknownPeer("user9".to_string())
    );
    assert!(store.receive_message("user9", "hi").is_err());
    assert_eq!(store.selected(), Some("user3"));
    assert_eq!(store.conversations(), before.as_slice());
}

#[test]
fn message_from_match_starts_a_conversation() {
    let (seed, mut store) = seeded_store(Arc::new(FixedClock::new(noon())));
    let m = &seed.matches[2];
    let peer = Peer {
        id: "match-3".to_string(),
        name: m.user.name.clone(),
        avatar: m.user.avatar.clone(),
    };

    let created = store.open_conversation(peer.clone()).clone();
    assert_eq!(created.peer, peer);
    assert!(store.active_thread().is_empty());

    store.send_message("Hi! Want to swap lessons?").unwrap();
    assert_eq!(store.thread("match-3").len(), 1);
    assert_eq!(store.conversations().len(), seed.conversations.len() + 1);

    // Reopening keeps the same row and history.
    store.select_conversation("user1").unwrap();
    let reopened = store.open_conversation(peer).clone();
    assert_eq!(reopened.id, created.id);
    assert_eq!(store.active_thread().len(), 1);
}

#[test]
fn rapid_sends_get_distinct_ids() {
    let (_, mut store) = seeded_store(Arc::new(FixedClock::new(noon())));
    store.select_conversation("user1").unwrap();
    let mut ids: Vec<String> = (0..5)
        .map(|i| store.send_message(&format!("note {i}")).unwrap().id.clone())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn dashboard_reflects_store_changes() {
    let (seed, mut store) = seeded_store(Arc::new(FixedClock::new(noon())));
    let summary = DashboardSummary::build(
        seed.time_balance_hours,
        seed.matches.len(),
        &seed.sessions,
        &store,
    );
    assert_eq!(summary.unread_messages, 1);

    store.select_conversation("user2").unwrap();
    let summary = DashboardSummary::build(
        seed.time_balance_hours,
        seed.matches.len(),
        &seed.sessions,
        &store,
    );
    assert_eq!(summary.unread_messages, 0);
}
