//! Axum router construction.

use axum::routing::{get, post, put};
use axum::Router;

use crate::web_client::handlers;
use crate::web_client::state::SharedState;

/// Build the complete Axum router with all API routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health_handler))
        // Conversations API
        .route(
            "/api/conversations",
            get(handlers::conversations::list_conversations_handler)
                .post(handlers::conversations::open_conversation_handler),
        )
        .route(
            "/api/conversations/:peer_id",
            get(handlers::conversations::get_conversation_handler),
        )
        .route(
            "/api/conversations/:peer_id/select",
            post(handlers::conversations::select_conversation_handler),
        )
        .route(
            "/api/conversations/:peer_id/incoming",
            post(handlers::conversations::incoming_message_handler),
        )
        .route(
            "/api/thread",
            get(handlers::conversations::active_thread_handler),
        )
        // Messages API
        .route(
            "/api/messages",
            post(handlers::messages::send_message_handler),
        )
        // Explore / dashboard
        .route("/api/matches", get(handlers::matches::list_matches_handler))
        .route(
            "/api/sessions",
            get(handlers::sessions::list_sessions_handler),
        )
        .route(
            "/api/dashboard",
            get(handlers::dashboard::dashboard_handler),
        )
        // Profile API
        .route(
            "/api/profile",
            get(handlers::profiles::get_profile_handler)
                .put(handlers::profiles::update_profile_handler),
        )
        .route(
            "/api/profile/skills",
            put(handlers::profiles::update_skills_handler),
        )
        .route(
            "/api/profile/skills/toggle",
            post(handlers::profiles::toggle_skill_handler),
        )
        .route(
            "/api/profile/skills/remove",
            post(handlers::profiles::remove_skill_handler),
        )
        .route("/api/skills", get(handlers::skills::list_skills_handler))
        .with_state(state)
}
