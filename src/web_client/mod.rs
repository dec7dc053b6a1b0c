//! skillswap-web: local REST API over the marketplace state.
//!
//! Loads the seed data, builds the in-memory state for the configured
//! session and serves it with axum until the process exits.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod utils;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;

use crate::auth::AuthSession;
use crate::clock::SystemClock;
use crate::logging;
use crate::seed::SeedData;

use config::{Cli, Config};
use state::AppState;

/// Entry point: parse CLI, load seed data, start server.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::from_cli_and_env(cli);

    logging::init();
    crate::sslog!("skillswap-web starting");

    let seed = match &config.seed_path {
        Some(path) => {
            crate::sslog!("  seed: {}", path.display());
            SeedData::load(path)?
        }
        None => {
            crate::sslog!("  seed: bundled data");
            SeedData::builtin()?
        }
    };

    let session = AuthSession::from_config(config.user.as_deref(), config.email.as_deref());
    match &session {
        Some(s) => crate::sslog!("  signed in as {}", logging::peer_id(&s.user_id)),
        None => crate::sslog!("  no session configured (API calls will answer 401)"),
    }

    let state = AppState::from_seed(seed, session, Arc::new(SystemClock))?;
    crate::sslog!(
        "  conversations: {}, matches: {}, sessions: {}",
        state.store.conversations().len(),
        state.matches.len(),
        state.sessions.len()
    );

    let app = router::build_router(state.into_shared());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    crate::sslog!("skillswap-web listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
