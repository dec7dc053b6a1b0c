//! Shared helpers for the web handlers: error bodies, the session gate and
//! JSON views of domain records.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};

use crate::auth::AuthSession;
use crate::conversations::{ConversationStore, ConversationSummary, Message};
use crate::display::{format_relative_date, format_session_when, format_time, initials};
use crate::matches::SkillMatch;
use crate::sessions::SkillSession;
use crate::web_client::state::AppState;

/// Build a standard JSON error response.
pub fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, axum::Json(body)).into_response()
}

/// The signed-in session, or the 401 response to return instead.
pub fn require_session(state: &AppState) -> Result<&AuthSession, Response> {
    state
        .session
        .as_ref()
        .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, "not signed in"))
}

pub fn conversation_to_json(
    c: &ConversationSummary,
    store: &ConversationStore,
    now: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "id": c.id,
        "peer_id": c.peer.id,
        "name": c.peer.name,
        "avatar": c.peer.avatar,
        "initials": initials(&c.peer.name),
        "last_message": c.last_message,
        "last_timestamp": c.last_timestamp,
        "date_label": format_relative_date(c.last_timestamp, now),
        "is_read": c.is_read,
        "unread_badge": store.shows_unread_badge(c),
        "selected": store.selected() == Some(c.peer.id.as_str()),
    })
}

pub fn message_to_json(m: &Message) -> serde_json::Value {
    serde_json::json!({
        "id": m.id,
        "sender_id": m.sender_id,
        "from_me": m.is_own(),
        "content": m.content,
        "timestamp": m.timestamp,
        "time_label": format_time(m.timestamp),
    })
}

pub fn thread_to_json(messages: &[Message]) -> serde_json::Value {
    serde_json::Value::Array(messages.iter().map(message_to_json).collect())
}

pub fn match_to_json(m: &SkillMatch) -> serde_json::Value {
    serde_json::json!({
        "id": m.id,
        "name": m.user.name,
        "avatar": m.user.avatar,
        "initials": initials(&m.user.name),
        "location": m.user.location,
        "teach_skill": m.teach_skill,
        "learn_skill": m.learn_skill,
        "match_score": m.match_score,
    })
}

pub fn session_to_json(s: &SkillSession) -> serde_json::Value {
    serde_json::json!({
        "id": s.id,
        "title": s.title,
        "starts_at": s.starts_at,
        "when": format_session_when(s.starts_at),
        "duration_minutes": s.duration_minutes,
        "duration": s.duration_line(),
        "status": s.status,
        "status_label": s.status.label(),
        "role": s.role,
        "role_label": s.role.label(),
        "participant": {
            "name": s.participant.name,
            "avatar": s.participant.avatar,
            "initials": initials(&s.participant.name),
        },
    })
}
