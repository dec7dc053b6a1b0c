//! In-memory conversation store.
//!
//! Holds the ordered list of conversation summaries, one message thread per
//! peer, and the currently selected conversation. The store is owned by a
//! single interactive session; callers that share it across tasks wrap it in
//! a mutex (see `web_client::state`).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Sender id used for messages written by the signed-in user.
pub const CURRENT_USER: &str = "currentUser";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownPeer(String),
    DuplicatePeer(String),
    ForeignSender { peer_id: String, sender_id: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownPeer(id) => write!(f, "no conversation with peer: {id}"),
            StoreError::DuplicatePeer(id) => write!(f, "duplicate conversation for peer: {id}"),
            StoreError::ForeignSender { peer_id, sender_id } => write!(
                f,
                "message from {sender_id} cannot belong to the conversation with {peer_id}"
            ),
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// The other participant of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub peer: Peer,
    pub last_message: String,
    pub last_timestamp: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn is_own(&self) -> bool {
        self.sender_id == CURRENT_USER
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

pub struct ConversationStore {
    conversations: Vec<ConversationSummary>,
    threads: HashMap<String, Vec<Message>>,
    selected: Option<String>,
    clock: Arc<dyn Clock>,
    last_issued: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore")
            .field("conversations", &self.conversations.len())
            .field("threads", &self.threads.len())
            .field("selected", &self.selected)
            .finish()
    }
}

impl ConversationStore {
    /// Build a store from seeded summaries and threads.
    ///
    /// Every thread key must name a listed peer, and every message in it must
    /// come from that peer or from [`CURRENT_USER`]. Peers without a thread
    /// simply start with an empty one.
    pub fn new(
        conversations: Vec<ConversationSummary>,
        threads: HashMap<String, Vec<Message>>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        for (i, conv) in conversations.iter().enumerate() {
            if conversations[..i].iter().any(|c| c.peer.id == conv.peer.id) {
                return Err(StoreError::DuplicatePeer(conv.peer.id.clone()));
            }
        }

        for (peer_id, messages) in &threads {
            if !conversations.iter().any(|c| &c.peer.id == peer_id) {
                return Err(StoreError::UnknownPeer(peer_id.clone()));
            }
            if let Some(m) = messages
                .iter()
                .find(|m| !m.is_own() && &m.sender_id != peer_id)
            {
                return Err(StoreError::ForeignSender {
                    peer_id: peer_id.clone(),
                    sender_id: m.sender_id.clone(),
                });
            }
        }

        Ok(Self {
            conversations,
            threads,
            selected: None,
            clock,
            last_issued: None,
        })
    }

    pub fn conversations(&self) -> &[ConversationSummary] {
        &self.conversations
    }

    pub fn conversation(&self, peer_id: &str) -> Option<&ConversationSummary> {
        self.conversations.iter().find(|c| c.peer.id == peer_id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_conversation(&self) -> Option<&ConversationSummary> {
        self.selected.as_deref().and_then(|id| self.conversation(id))
    }

    /// Messages exchanged with `peer_id`, oldest first. Unknown peers have an
    /// empty thread.
    pub fn thread(&self, peer_id: &str) -> &[Message] {
        self.threads.get(peer_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Thread of the selected conversation, or an empty slice.
    pub fn active_thread(&self) -> &[Message] {
        match &self.selected {
            Some(id) => self.thread(id),
            None => &[],
        }
    }

    /// Select the conversation with `peer_id` and mark it read.
    pub fn select_conversation(&mut self, peer_id: &str) -> Result<&[Message], StoreError> {
        let conv = self
            .conversations
            .iter_mut()
            .find(|c| c.peer.id == peer_id)
            .ok_or_else(|| StoreError::UnknownPeer(peer_id.to_string()))?;
        conv.is_read = true;
        self.selected = Some(peer_id.to_string());
        Ok(self.thread(peer_id))
    }

    /// Append a message from the current user to the selected conversation.
    ///
    /// Returns `None` without touching any state when nothing is selected or
    /// `text` is blank.
    pub fn send_message(&mut self, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let peer_id = self.selected.clone()?;
        self.append(&peer_id, CURRENT_USER, text, true)
    }

    /// Append a message written by `peer_id`.
    ///
    /// The conversation stays read only if it is the selected one. Blank text
    /// is ignored (`Ok(None)`).
    pub fn receive_message(
        &mut self,
        peer_id: &str,
        text: &str,
    ) -> Result<Option<&Message>, StoreError> {
        if self.conversation(peer_id).is_none() {
            return Err(StoreError::UnknownPeer(peer_id.to_string()));
        }
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let is_read = self.selected.as_deref() == Some(peer_id);
        Ok(self.append(peer_id, peer_id, text, is_read))
    }

    /// Start a conversation with `peer` (or reuse the existing one) and
    /// select it.
    pub fn open_conversation(&mut self, peer: Peer) -> &ConversationSummary {
        let idx = match self.conversations.iter().position(|c| c.peer.id == peer.id) {
            Some(idx) => idx,
            None => {
                let id = self.next_conversation_id();
                let last_timestamp = self.clock.now();
                self.conversations.push(ConversationSummary {
                    id,
                    peer: peer.clone(),
                    last_message: String::new(),
                    last_timestamp,
                    is_read: true,
                });
                self.conversations.len() - 1
            }
        };
        self.conversations[idx].is_read = true;
        self.selected = Some(peer.id);
        &self.conversations[idx]
    }

    /// Conversations with a message nobody has looked at yet.
    pub fn unread_count(&self) -> usize {
        self.conversations.iter().filter(|c| !c.is_read).count()
    }

    /// Whether the list row for `summary` should carry the unread dot.
    pub fn shows_unread_badge(&self, summary: &ConversationSummary) -> bool {
        !summary.is_read && self.selected.as_deref() != Some(summary.peer.id.as_str())
    }

    fn append(
        &mut self,
        peer_id: &str,
        sender_id: &str,
        text: &str,
        is_read: bool,
    ) -> Option<&Message> {
        let now = self.clock.now();
        let message = Message {
            id: self.next_message_id(now),
            sender_id: sender_id.to_string(),
            content: text.to_string(),
            timestamp: now,
        };

        let conv = self.conversations.iter_mut().find(|c| c.peer.id == peer_id)?;
        conv.last_message = message.content.clone();
        conv.last_timestamp = message.timestamp;
        conv.is_read = is_read;

        let thread = self.threads.entry(peer_id.to_string()).or_default();
        thread.push(message);
        thread.last()
    }

    /// `msg<unix-millis>`, bumped past the previous id when the clock has not
    /// moved on.
    fn next_message_id(&mut self, now: DateTime<Utc>) -> String {
        let stamp = match self.last_issued {
            Some(prev) if now <= prev => prev + Duration::milliseconds(1),
            _ => now,
        };
        self.last_issued = Some(stamp);
        format!("msg{}", stamp.timestamp_millis())
    }

    fn next_conversation_id(&self) -> String {
        let mut n = self.conversations.len() + 1;
        while self.conversations.iter().any(|c| c.id == n.to_string()) {
            n += 1;
        }
        n.to_string()
    }
}
