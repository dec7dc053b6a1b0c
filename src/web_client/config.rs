//! Configuration for the skillswap web server.

use std::path::PathBuf;

use clap::Parser;

pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Upper bound on a single message body accepted by `POST /api/messages`.
pub(crate) const MAX_MESSAGE_CHARS: usize = 4_000;

/// Local REST API for the skillswap marketplace.
///
/// Serves conversations, skill matches, sessions, profile and dashboard data
/// from an in-memory store seeded at startup.
///
/// Every option can also be set through an environment variable; CLI
/// arguments take precedence.
#[derive(Parser, Debug)]
#[command(name = "skillswap-web", version, about)]
pub struct Cli {
    /// HTTP server bind address [env: SKILLSWAP_BIND] [default: 127.0.0.1:3000]
    #[arg(long, short = 'b')]
    pub bind: Option<String>,

    /// JSON seed file to start from instead of the bundled data [env: SKILLSWAP_SEED]
    #[arg(long, short = 's')]
    pub seed: Option<PathBuf>,

    /// Signed-in user id; without one every API call except health is refused [env: SKILLSWAP_USER]
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// Email address of the signed-in user [env: SKILLSWAP_EMAIL]
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub seed_path: Option<PathBuf>,
    pub user: Option<String>,
    pub email: Option<String>,
}

impl Config {
    pub fn from_cli_and_env(cli: Cli) -> Self {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = cli
            .bind
            .or_else(|| env("SKILLSWAP_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let seed_path = cli
            .seed
            .or_else(|| env("SKILLSWAP_SEED").map(PathBuf::from));

        let user = cli.user.or_else(|| env("SKILLSWAP_USER"));
        let email = cli.email.or_else(|| env("SKILLSWAP_EMAIL"));

        Self {
            bind_addr,
            seed_path,
            user,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_cli_or_env() {
        let cli = Cli::parse_from(["skillswap-web"]);
        let config = Config::resolve(cli, env_of(&[]));
        assert_eq!(config.bind_addr, DEFAULT_BIND);
        assert_eq!(config.seed_path, None);
        assert_eq!(config.user, None);
    }

    #[test]
    fn env_fills_gaps() {
        let cli = Cli::parse_from(["skillswap-web"]);
        let config = Config::resolve(
            cli,
            env_of(&[("SKILLSWAP_USER", "johndoe"), ("SKILLSWAP_BIND", "0.0.0.0:8080")]),
        );
        assert_eq!(config.user.as_deref(), Some("johndoe"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn cli_beats_env() {
        let cli = Cli::parse_from(["skillswap-web", "-u", "alice", "--seed", "/tmp/seed.json"]);
        let config = Config::resolve(cli, env_of(&[("SKILLSWAP_USER", "johndoe")]));
        assert_eq!(config.user.as_deref(), Some("alice"));
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }
}
