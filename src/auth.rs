//! The signed-in session handed over by the identity provider.
//!
//! Sign-in itself happens elsewhere. This crate only needs to know whether a
//! session is present and who it belongs to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthSession {
    /// Build a session from configured values; a blank user id means
    /// signed out.
    pub fn from_config(user_id: Option<&str>, email: Option<&str>) -> Option<Self> {
        let user_id = user_id.map(str::trim).filter(|u| !u.is_empty())?;
        Some(Self {
            user_id: user_id.to_string(),
            email: email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        })
    }
}
