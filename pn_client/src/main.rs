//! Terminal companion for poker nights.
//!
//! `timer` runs the blind clock with keyboard commands on stdin;
//! `leaderboard` ranks a group's players from an event store export.

use anyhow::{Context, Result, bail};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use pn_client::{
    commands::parse_command,
    config::{ClientConfig, Overrides},
    display, logging,
    timer::{COMMANDS_HELP, Reply, TimerSession},
};
use poker_nights::{
    events::{CompletedEvent, completed_for_group, parse_events},
    stats::{MemberProfile, leaderboard},
    tournament::{
        ClockActor, ClockPhase, ClockSnapshot, TournamentTemplate,
        templates::{find_template, parse_custom_templates},
    },
};
use std::{
    collections::HashMap,
    io::{self, Write},
    path::Path,
};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Blind timer and leaderboards for home poker games

USAGE:
  pn_client timer [OPTIONS]
  pn_client leaderboard --events FILE [OPTIONS]

TIMER OPTIONS:
  --template ID           Template id, alias or name  [default: env PN_TEMPLATE or standard]
  --templates-file FILE   JSON array of custom templates  [default: env PN_TEMPLATES_FILE]

LEADERBOARD OPTIONS:
  --events FILE           Event store JSON export  [default: env PN_EVENTS_FILE]
  --members FILE          JSON map of user id to profile  [default: env PN_MEMBERS_FILE]
  --group ID              Only count events of this group
  --order ORDER           wins, games or earnings  [default: wins]

FLAGS:
  -h, --help              Print help information

ENVIRONMENT:
  PN_TICK_MILLIS          Clock cadence in milliseconds  [default: 1000]
  RUST_LOG                Log filter  [default: info]
";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let subcommand = pargs.subcommand()?;

    let overrides = Overrides {
        template: pargs.opt_value_from_str("--template")?,
        templates_file: pargs.opt_value_from_str("--templates-file")?,
        events_file: pargs.opt_value_from_str("--events")?,
        members_file: pargs.opt_value_from_str("--members")?,
        group: pargs.opt_value_from_str("--group")?,
        order: pargs.opt_value_from_str("--order")?,
    };

    let config = ClientConfig::from_env(overrides)?;
    config.validate()?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    logging::init();

    match subcommand.as_deref() {
        Some("timer") | None => run_timer(config).await,
        Some("leaderboard") => run_leaderboard(&config),
        Some(other) => bail!("Unknown command '{other}'. Run with --help for usage"),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_custom_templates(config: &ClientConfig) -> Result<Vec<TournamentTemplate>> {
    match &config.templates_file {
        Some(path) => {
            let templates = parse_custom_templates(&read_file(path)?)
                .with_context(|| format!("Invalid templates in {}", path.display()))?;
            info!("Loaded {} custom template(s)", templates.len());
            Ok(templates)
        }
        None => Ok(Vec::new()),
    }
}

fn print_status(snapshot: &ClockSnapshot) -> Result<()> {
    print!("\r{:<32}", display::status_line(snapshot));
    io::stdout().flush()?;
    Ok(())
}

async fn run_timer(config: ClientConfig) -> Result<()> {
    let custom = load_custom_templates(&config)?;
    let template = find_template(&config.template, &custom)?;

    let (handle, task) = ClockActor::spawn(&template, config.tick)
        .with_context(|| format!("Template '{}' is not usable", template.name))?;
    let mut updates = handle.subscribe(64).await?;
    let mut session = TimerSession::new(handle.clone(), template, custom);

    let mut snapshot = handle.snapshot().await?;
    println!("{}", display::level_banner(&snapshot));
    println!("{COMMANDS_HELP}");
    print_status(&snapshot)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(update) = update else { break };
                if update.level != snapshot.level || update.name != snapshot.name {
                    println!("\n{}", display::level_banner(&update));
                }
                print_status(&update)?;

                if update.phase == ClockPhase::Finished && snapshot.phase != ClockPhase::Finished {
                    println!("\nTournament complete");
                }
                snapshot = update;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    handle.close().await?;
                    break;
                };

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match session.execute(command).await {
                    Ok(Reply::Clock(_)) => {}
                    Ok(Reply::Text(text)) => println!("{text}"),
                    Ok(Reply::Quit) => break,
                    Err(e) => println!("{e:#}"),
                }
            }
        }
    }

    task.await?;
    println!();
    Ok(())
}

fn run_leaderboard(config: &ClientConfig) -> Result<()> {
    let path = config.require_events_file()?;
    let events = parse_events(&read_file(path)?)
        .with_context(|| format!("Invalid events in {}", path.display()))?;

    let completed: Vec<CompletedEvent> = match &config.group {
        Some(group_id) => completed_for_group(&events, group_id),
        None => events
            .iter()
            .filter(|event| event.is_completed())
            .map(CompletedEvent::from)
            .collect(),
    };
    info!(
        "Ranking {} completed event(s) out of {}",
        completed.len(),
        events.len()
    );

    let members: HashMap<String, MemberProfile> = match &config.members_file {
        Some(path) => serde_json::from_str(&read_file(path)?)
            .with_context(|| format!("Invalid members in {}", path.display()))?,
        None => HashMap::new(),
    };

    let stats = leaderboard(&completed, &members, config.order);
    println!("{}", display::leaderboard_table(&stats));
    Ok(())
}
