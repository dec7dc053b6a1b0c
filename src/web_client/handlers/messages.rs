//! Sending messages to the selected conversation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::logging;
use crate::web_client::config::MAX_MESSAGE_CHARS;
use crate::web_client::state::SharedState;
use crate::web_client::utils::{api_error, conversation_to_json, message_to_json, require_session};

#[derive(Deserialize)]
pub struct SendMessageRequest {
    text: String,
}

/// Append a message from the signed-in user to the selected conversation.
///
/// Blank text, or no selected conversation, is not an error: the response is
/// `200 {"sent": false}` and nothing changes. The length limit applies to the
/// trimmed text of a send that would otherwise go through.
pub async fn send_message_handler(
    State(state): State<SharedState>,
    axum::Json(req): axum::Json<SendMessageRequest>,
) -> Response {
    let mut st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let text = req.text.trim();
    if text.is_empty() || st.store.selected().is_none() {
        let body = serde_json::json!({ "sent": false });
        return (StatusCode::OK, axum::Json(body)).into_response();
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("message longer than {MAX_MESSAGE_CHARS} characters"),
        );
    }

    let Some(message) = st.store.send_message(text).cloned() else {
        let body = serde_json::json!({ "sent": false });
        return (StatusCode::OK, axum::Json(body)).into_response();
    };

    let peer_id = st.store.selected().unwrap_or_default().to_string();
    crate::sslog!(
        "sent {} to {}",
        logging::msg_id(&message.id),
        logging::peer_id(&peer_id)
    );

    let now = st.clock.now();
    let conversation = st
        .store
        .selected_conversation()
        .map(|c| conversation_to_json(c, &st.store, now));
    let body = serde_json::json!({
        "sent": true,
        "message": message_to_json(&message),
        "conversation": conversation,
    });
    (StatusCode::CREATED, axum::Json(body)).into_response()
}
