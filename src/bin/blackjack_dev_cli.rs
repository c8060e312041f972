// src/bin/blackjack_dev_cli.rs
//
// Интерактивная консоль для ручной игры против дилера.
// Команды: new | hit | stick | show | list | use <match_uuid> <player_id> | json <request> | quit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use blackjack_engine::api::{BlackjackService, MatchViewDto};
use blackjack_engine::config::EngineConfig;
use blackjack_engine::domain::{MatchId, ParticipantId};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "blackjack_dev_cli",
    about = "Play blackjack against the dealer from the terminal"
)]
struct Args {
    /// Path to a JSON config (EngineConfig).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for deterministic dealing (overrides config).
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: trace / debug / info / warn / error (overrides config).
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<EngineConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
            EngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn print_view(view: &MatchViewDto) {
    println!("match  : {}", view.match_uuid);
    println!("status : {}", view.game);
    println!(
        "player : [{}]  {}",
        view.cards.player.join(" "),
        view.score.player
    );
    println!(
        "dealer : [{}]  {}",
        view.cards.dealer.join(" "),
        view.score.dealer
    );
}

fn main() {
    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(2);
        }
    };

    let level = config.tracing_level().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    info!(seed = ?config.rng_seed, "blackjack dev cli started");
    println!("=== BLACKJACK DEV CLI ===");
    println!("commands: new | hit | stick | show | list | quit");
    println!("          use <match_uuid> <player_id> | json <request>\n");

    let service = BlackjackService::in_memory(&config);
    let mut current: Option<(MatchId, ParticipantId)> = None;

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        let result = match (cmd, current) {
            ("", _) => continue,
            ("quit" | "exit", _) => break,
            ("new", _) => service.new_match(),
            ("hit", Some((m, p))) => service.hit(m, p),
            ("stick", Some((m, p))) => service.stick(m, p),
            ("show", Some((m, p))) => service.show(m, p),
            ("hit" | "stick" | "show", None) => {
                println!("no match yet, type `new`");
                continue;
            }
            ("list", _) => {
                println!("{}", service.handle_json(r#""ListMatches""#));
                continue;
            }
            ("json", _) => {
                println!("{}", service.handle_json(rest));
                continue;
            }
            ("use", _) => {
                let mut parts = rest.split_whitespace();
                let parsed = parts
                    .next()
                    .and_then(|m| m.parse::<MatchId>().ok())
                    .zip(parts.next().and_then(|p| p.parse::<ParticipantId>().ok()));
                match parsed {
                    Some(pair) => current = Some(pair),
                    None => println!("usage: use <match_uuid> <player_id>"),
                }
                continue;
            }
            (other, _) => {
                println!("unknown command: {other}");
                continue;
            }
        };

        match result {
            Ok(view) => {
                current = Some((view.match_uuid, view.player_id));
                print_view(&view);
            }
            Err(err) => println!("error: {err}"),
        }
    }

    println!("bye");
}
