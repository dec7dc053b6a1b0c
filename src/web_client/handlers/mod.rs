//! Route handler modules for the skillswap REST API.

pub mod conversations;
pub mod dashboard;
pub mod health;
pub mod matches;
pub mod messages;
pub mod profiles;
pub mod sessions;
pub mod skills;
