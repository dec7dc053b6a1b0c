//! Profile and skill list handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::display::initials;
use crate::profile::{Profile, ProfileUpdate, SkillSide, SkillsUpdate};
use crate::web_client::state::SharedState;
use crate::web_client::utils::{api_error, require_session};

fn profile_json(user_id: &str, profile: &Profile) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "full_name": profile.full_name,
        "username": profile.username,
        "initials": initials(&profile.full_name),
        "bio": profile.bio,
        "location": profile.location,
        "teach_skills": profile.teach_skills,
        "learn_skills": profile.learn_skills,
    })
}

pub async fn get_profile_handler(State(state): State<SharedState>) -> Response {
    let st = state.lock().await;
    let session = match require_session(&st) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let json = profile_json(&session.user_id, &st.profile);
    (StatusCode::OK, axum::Json(json)).into_response()
}

pub async fn update_profile_handler(
    State(state): State<SharedState>,
    axum::Json(update): axum::Json<ProfileUpdate>,
) -> Response {
    let mut st = state.lock().await;
    let user_id = match require_session(&st) {
        Ok(s) => s.user_id.clone(),
        Err(resp) => return resp,
    };
    if let Err(e) = st.profile.apply(update) {
        return api_error(StatusCode::BAD_REQUEST, e.to_string());
    }
    crate::sslog!("profile updated for {}", crate::logging::peer_id(&user_id));
    let json = profile_json(&user_id, &st.profile);
    (StatusCode::OK, axum::Json(json)).into_response()
}

pub async fn update_skills_handler(
    State(state): State<SharedState>,
    axum::Json(update): axum::Json<SkillsUpdate>,
) -> Response {
    let mut st = state.lock().await;
    let user_id = match require_session(&st) {
        Ok(s) => s.user_id.clone(),
        Err(resp) => return resp,
    };
    st.profile.set_skills(update);

    // Free-form skills are accepted; report which ones the catalog lacks.
    let uncatalogued: Vec<&str> = st
        .profile
        .teach_skills
        .iter()
        .chain(st.profile.learn_skills.iter())
        .map(String::as_str)
        .filter(|s| !st.catalog.contains(s))
        .collect();
    let mut json = profile_json(&user_id, &st.profile);
    json["uncatalogued"] = serde_json::json!(uncatalogued);
    (StatusCode::OK, axum::Json(json)).into_response()
}

#[derive(Deserialize)]
pub struct SkillEditRequest {
    side: SkillSide,
    skill: String,
}

/// Add a skill to the teach or learn list, or take it off again.
pub async fn toggle_skill_handler(
    State(state): State<SharedState>,
    axum::Json(req): axum::Json<SkillEditRequest>,
) -> Response {
    let mut st = state.lock().await;
    let user_id = match require_session(&st) {
        Ok(s) => s.user_id.clone(),
        Err(resp) => return resp,
    };
    let listed = match st.profile.toggle_skill(req.side, &req.skill) {
        Ok(listed) => listed,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let mut json = profile_json(&user_id, &st.profile);
    json["listed"] = serde_json::json!(listed);
    (StatusCode::OK, axum::Json(json)).into_response()
}

pub async fn remove_skill_handler(
    State(state): State<SharedState>,
    axum::Json(req): axum::Json<SkillEditRequest>,
) -> Response {
    let mut st = state.lock().await;
    let user_id = match require_session(&st) {
        Ok(s) => s.user_id.clone(),
        Err(resp) => return resp,
    };
    let removed = st.profile.remove_skill(req.side, &req.skill);
    let mut json = profile_json(&user_id, &st.profile);
    json["removed"] = serde_json::json!(removed);
    (StatusCode::OK, axum::Json(json)).into_response()
}
