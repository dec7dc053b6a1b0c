//! Explore view: skill matches with search, tab, category and sort filters.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::matches::{explore, ExploreTab, MatchQuery, SortOrder};
use crate::web_client::state::SharedState;
use crate::web_client::utils::{api_error, match_to_json, require_session};

#[derive(Deserialize)]
pub struct MatchesParams {
    q: Option<String>,
    tab: Option<String>,
    /// Comma-separated category names.
    categories: Option<String>,
    sort: Option<String>,
}

impl MatchesParams {
    fn into_query(self) -> Result<MatchQuery, Response> {
        let bad_request = |e: crate::matches::ParseError| {
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        };
        let tab = match self.tab {
            Some(t) => t.parse::<ExploreTab>().map_err(bad_request)?,
            None => ExploreTab::default(),
        };
        let sort = match self.sort {
            Some(s) => s.parse::<SortOrder>().map_err(bad_request)?,
            None => SortOrder::default(),
        };
        let categories = self
            .categories
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(MatchQuery {
            search: self.q,
            tab,
            categories,
            sort,
        })
    }
}

pub async fn list_matches_handler(
    State(state): State<SharedState>,
    Query(params): Query<MatchesParams>,
) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let query = match params.into_query() {
        Ok(q) => q,
        Err(resp) => return resp,
    };

    let found: Vec<serde_json::Value> = explore(&st.matches, &st.profile, &st.catalog, &query)
        .into_iter()
        .map(match_to_json)
        .collect();
    let body = serde_json::json!({
        "tab": query.tab,
        "sort": query.sort,
        "total": st.matches.len(),
        "matches": found,
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}
