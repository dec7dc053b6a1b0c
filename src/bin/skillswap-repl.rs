//! skillswap-repl: terminal session over the marketplace state.
//!
//! Drives the conversation store directly: open a conversation, type to send,
//! simulate incoming messages, and browse matches, sessions and the dashboard.

use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use skillswap::clock::{Clock, SystemClock};
use skillswap::conversations::{ConversationStore, StoreError};
use skillswap::dashboard::DashboardSummary;
use skillswap::display::{format_relative_date, format_session_when, format_time};
use skillswap::matches::{explore, ExploreTab, MatchQuery, SkillMatch};
use skillswap::profile::{Profile, SkillSide};
use skillswap::seed::SeedData;
use skillswap::sessions::{past, upcoming, SkillSession};
use skillswap::skills::SkillCatalog;

const PROMPT: &str = "\x1b[1;34mskillswap>\x1b[0m ";

struct Repl {
    store: ConversationStore,
    profile: Profile,
    catalog: SkillCatalog,
    matches: Vec<SkillMatch>,
    sessions: Vec<SkillSession>,
    time_balance_hours: u32,
    clock: Arc<dyn Clock>,
}

impl Repl {
    fn from_seed(seed: SeedData, clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        Ok(Self {
            store: ConversationStore::new(seed.conversations, seed.threads, Arc::clone(&clock))?,
            profile: seed.profile,
            catalog: seed.skill_catalog,
            matches: seed.matches,
            sessions: seed.sessions,
            time_balance_hours: seed.time_balance_hours,
            clock,
        })
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let seed = match parse_seed_path()? {
        Some(path) => SeedData::load(&path)?,
        None => SeedData::builtin()?,
    };
    let mut repl = Repl::from_seed(seed, Arc::new(SystemClock))?;

    println!(
        "Signed in as {} ({} conversations, {} unread).",
        repl.profile.full_name,
        repl.store.conversations().len(),
        repl.store.unread_count()
    );
    let mut stdout = io::stdout();
    print_help(&mut stdout)?;

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                editor.add_history_entry(input)?;

                if matches!(input, "quit" | "exit") {
                    println!("Goodbye!");
                    break;
                }

                if let Err(error) = handle_command(input, &mut repl, &mut stdout) {
                    eprintln!("error: {error}");
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("(ctrl-c) type 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(())
}

fn parse_seed_path() -> Result<Option<PathBuf>, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut seed = env::var("SKILLSWAP_SEED").ok().map(PathBuf::from);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = Some(PathBuf::from(value));
            }
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }
    Ok(seed)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  list                      conversations (* selected, ● unread)")?;
    writeln!(out, "  open <peer>               select a conversation and show its thread")?;
    writeln!(out, "  send <text> | <text>      message the selected conversation")?;
    writeln!(out, "  incoming <peer> <text>    simulate a message from a peer")?;
    writeln!(out, "  matches [tab] [search]    tab: all | teaching | learning")?;
    writeln!(out, "  sessions                  upcoming and past sessions")?;
    writeln!(out, "  dashboard                 balance and counts")?;
    writeln!(out, "  teach <skill>             add or remove a skill you teach")?;
    writeln!(out, "  learn <skill>             add or remove a skill you want to learn")?;
    writeln!(out, "  drop teach|learn <skill>  remove a skill")?;
    writeln!(out, "  help | quit")?;
    writeln!(out)?;
    writeln!(
        out,
        "With a conversation open, any other line is sent as a message. Words that"
    )?;
    writeln!(
        out,
        "take no arguments (list, sessions, dashboard, help) only run on their own;"
    )?;
    writeln!(
        out,
        "use `send` for text that starts with open, incoming, matches, teach, learn or drop."
    )?;
    Ok(())
}

fn handle_command(
    input: &str,
    repl: &mut Repl,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let (cmd, rest) = match input.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };

    match cmd {
        "help" if rest.is_empty() => print_help(out)?,
        "list" if rest.is_empty() => list_conversations(repl, out)?,
        "open" => {
            if rest.is_empty() {
                return Err("usage: open <peer>".into());
            }
            repl.store.select_conversation(rest)?;
            print_thread(repl, out)?;
        }
        "send" => send(repl, rest, out)?,
        "incoming" => {
            let (peer, text) = rest
                .split_once(' ')
                .ok_or("usage: incoming <peer> <text>")?;
            if let Some(m) = repl.store.receive_message(peer, text)? {
                writeln!(out, "[{}] {}: {}", format_time(m.timestamp), peer, m.content)?;
            }
        }
        "matches" => list_matches(repl, rest, out)?,
        "sessions" if rest.is_empty() => list_sessions(&repl.sessions, out)?,
        "dashboard" if rest.is_empty() => {
            let summary = DashboardSummary::build(
                repl.time_balance_hours,
                repl.matches.len(),
                &repl.sessions,
                &repl.store,
            );
            writeln!(out, "Time balance:      {} hours", summary.time_balance_hours)?;
            writeln!(out, "Matches:           {}", summary.match_count)?;
            writeln!(out, "Upcoming sessions: {}", summary.upcoming_sessions)?;
            writeln!(out, "Unread messages:   {}", summary.unread_messages)?;
        }
        "teach" | "learn" => {
            let side = if cmd == "teach" {
                SkillSide::Teach
            } else {
                SkillSide::Learn
            };
            let listed = repl.profile.toggle_skill(side, rest)?;
            let verb = if listed { "added" } else { "removed" };
            writeln!(out, "{verb} {rest} ({cmd})")?;
        }
        "drop" => {
            let (list, skill) = rest
                .split_once(' ')
                .ok_or("usage: drop teach|learn <skill>")?;
            let side = match list {
                "teach" => SkillSide::Teach,
                "learn" => SkillSide::Learn,
                _ => return Err("usage: drop teach|learn <skill>".into()),
            };
            if repl.profile.remove_skill(side, skill) {
                writeln!(out, "removed {} ({list})", skill.trim())?;
            } else {
                writeln!(out, "{} is not in your {list} list", skill.trim())?;
            }
        }
        _ if repl.store.selected().is_some() => send(repl, input, out)?,
        _ => return Err(format!("unknown command: {cmd} (type 'help')").into()),
    }
    Ok(())
}

fn send(repl: &mut Repl, text: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    if let Some(m) = repl.store.send_message(text) {
        writeln!(out, "[{}] you: {}", format_time(m.timestamp), m.content)?;
    }
    Ok(())
}

fn list_conversations(repl: &Repl, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let now = repl.clock.now();
    for c in repl.store.conversations() {
        let selected = if repl.store.selected() == Some(c.peer.id.as_str()) {
            '*'
        } else {
            ' '
        };
        let unread = if repl.store.shows_unread_badge(c) {
            '●'
        } else {
            ' '
        };
        writeln!(
            out,
            "{selected}{unread} {:<8} {:<18} {:<10} {}",
            c.peer.id,
            c.peer.name,
            format_relative_date(c.last_timestamp, now),
            c.last_message
        )?;
    }
    Ok(())
}

fn print_thread(repl: &Repl, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let Some(conv) = repl.store.selected_conversation() else {
        return Ok(());
    };
    writeln!(out, "── {} ──", conv.peer.name)?;
    for m in repl.store.active_thread() {
        let who = if m.is_own() { "you" } else { conv.peer.name.as_str() };
        writeln!(out, "[{}] {}: {}", format_time(m.timestamp), who, m.content)?;
    }
    Ok(())
}

fn list_matches(repl: &Repl, args: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let (first, remainder) = match args.split_once(' ') {
        Some((first, remainder)) => (first, remainder),
        None => (args, ""),
    };
    // A leading tab name is optional; anything else is search text.
    let (tab, search) = match first.parse::<ExploreTab>() {
        Ok(tab) => (tab, remainder),
        Err(_) => (ExploreTab::All, args),
    };
    let query = MatchQuery {
        search: Some(search.to_string()),
        tab,
        ..Default::default()
    };
    for m in explore(&repl.matches, &repl.profile, &repl.catalog, &query) {
        writeln!(
            out,
            "{:>3}%  {:<16} {:<18} teaches {:<16} wants {}",
            m.match_score, m.user.name, m.user.location, m.teach_skill, m.learn_skill
        )?;
    }
    Ok(())
}

fn list_sessions(sessions: &[SkillSession], out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Upcoming:")?;
    for s in upcoming(sessions) {
        write_session(s, out)?;
    }
    writeln!(out, "Past:")?;
    for s in past(sessions) {
        write_session(s, out)?;
    }
    Ok(())
}

fn write_session(s: &SkillSession, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(
        out,
        "  {:<32} {} ({}, {} with {})",
        s.title,
        format_session_when(s.starts_at),
        s.duration_line(),
        s.role.label(),
        s.participant.name
    )?;
    Ok(())
}
