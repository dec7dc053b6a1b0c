use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dashboard::DashboardSummary;
use crate::web_client::state::SharedState;
use crate::web_client::utils::require_session;

pub async fn dashboard_handler(State(state): State<SharedState>) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let summary = DashboardSummary::build(
        st.time_balance_hours,
        st.matches.len(),
        &st.sessions,
        &st.store,
    );
    (StatusCode::OK, axum::Json(summary)).into_response()
}
