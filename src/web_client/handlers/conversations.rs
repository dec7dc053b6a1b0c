//! Conversation list, selection and thread handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::conversations::{Peer, StoreError};
use crate::logging;
use crate::web_client::state::SharedState;
use crate::web_client::utils::{
    api_error, conversation_to_json, message_to_json, require_session, thread_to_json,
};

const DEFAULT_AVATAR: &str = "/placeholder.svg?height=40&width=40";

fn store_error(e: StoreError) -> Response {
    match e {
        StoreError::UnknownPeer(_) => api_error(StatusCode::NOT_FOUND, e.to_string()),
        _ => api_error(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

pub async fn list_conversations_handler(State(state): State<SharedState>) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let now = st.clock.now();
    let conversations: Vec<serde_json::Value> = st
        .store
        .conversations()
        .iter()
        .map(|c| conversation_to_json(c, &st.store, now))
        .collect();
    let body = serde_json::json!({
        "conversations": conversations,
        "selected": st.store.selected(),
        "unread_count": st.store.unread_count(),
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}

/// Read a peer's thread without changing the selection.
pub async fn get_conversation_handler(
    State(state): State<SharedState>,
    Path(peer_id): Path<String>,
) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let Some(conv) = st.store.conversation(&peer_id) else {
        return store_error(StoreError::UnknownPeer(peer_id));
    };
    let body = serde_json::json!({
        "conversation": conversation_to_json(conv, &st.store, st.clock.now()),
        "messages": thread_to_json(st.store.thread(&peer_id)),
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub async fn select_conversation_handler(
    State(state): State<SharedState>,
    Path(peer_id): Path<String>,
) -> Response {
    let mut st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let messages = match st.store.select_conversation(&peer_id) {
        Ok(thread) => thread_to_json(thread),
        Err(e) => return store_error(e),
    };
    crate::sslog!("selected conversation with {}", logging::peer_id(&peer_id));

    let now = st.clock.now();
    let conversation = st
        .store
        .conversation(&peer_id)
        .map(|c| conversation_to_json(c, &st.store, now));
    let body = serde_json::json!({
        "conversation": conversation,
        "messages": messages,
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}

/// The selected conversation and its thread (both empty when nothing is
/// selected).
pub async fn active_thread_handler(State(state): State<SharedState>) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let conversation = st
        .store
        .selected_conversation()
        .map(|c| conversation_to_json(c, &st.store, st.clock.now()));
    let body = serde_json::json!({
        "selected": st.store.selected(),
        "conversation": conversation,
        "messages": thread_to_json(st.store.active_thread()),
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}

#[derive(Deserialize)]
pub struct OpenConversationRequest {
    peer_id: String,
    name: String,
    avatar: Option<String>,
}

/// Start (or reopen) a conversation, e.g. from a match card.
pub async fn open_conversation_handler(
    State(state): State<SharedState>,
    axum::Json(req): axum::Json<OpenConversationRequest>,
) -> Response {
    let mut st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let peer_id = req.peer_id.trim();
    let name = req.name.trim();
    if peer_id.is_empty() || name.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "peer_id and name are required");
    }

    let peer = Peer {
        id: peer_id.to_string(),
        name: name.to_string(),
        avatar: req.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
    };
    let existed = st.store.conversation(&peer.id).is_some();
    st.store.open_conversation(peer);
    crate::sslog!(
        "opened conversation with {} (new: {})",
        logging::peer_id(peer_id),
        !existed
    );

    let now = st.clock.now();
    let conversation = st
        .store
        .selected_conversation()
        .map(|c| conversation_to_json(c, &st.store, now));
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let body = serde_json::json!({
        "conversation": conversation,
        "messages": thread_to_json(st.store.active_thread()),
    });
    (status, axum::Json(body)).into_response()
}

#[derive(Deserialize)]
pub struct IncomingMessageRequest {
    text: String,
}

/// Deliver a message written by `peer_id`.
pub async fn incoming_message_handler(
    State(state): State<SharedState>,
    Path(peer_id): Path<String>,
    axum::Json(req): axum::Json<IncomingMessageRequest>,
) -> Response {
    let mut st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let message = match st.store.receive_message(&peer_id, &req.text) {
        Ok(Some(m)) => m.clone(),
        Ok(None) => {
            let body = serde_json::json!({ "received": false });
            return (StatusCode::OK, axum::Json(body)).into_response();
        }
        Err(e) => return store_error(e),
    };
    crate::sslog!(
        "received {} from {}",
        logging::msg_id(&message.id),
        logging::peer_id(&peer_id)
    );

    let body = serde_json::json!({
        "received": true,
        "message": message_to_json(&message),
    });
    (StatusCode::CREATED, axum::Json(body)).into_response()
}
