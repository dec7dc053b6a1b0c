pub mod auth;
pub mod clock;
pub mod conversations;
pub mod dashboard;
pub mod display;
pub mod logging;
pub mod matches;
pub mod profile;
pub mod seed;
pub mod sessions;
pub mod skills;
pub mod web_client;
