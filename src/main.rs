//! Skirmish - Entry Point
//!
//! Runs a single command from the command line, or the interactive menu
//! when no command is given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use skirmish::combat::EncounterOutcome;
use skirmish::core::{GameConfig, Result};
use skirmish::inventory::{Item, Rarity};
use skirmish::session::{LogExporter, MenuChoice, Session};

/// Skirmish - randomly generated fights and a loot stash
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Simulate turn-based encounters and manage a loot stash")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Random seed for deterministic runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file overriding the default game config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Player name used for the stash and leaderboards
    #[arg(long, global = true, default_value = "Player")]
    player: String,

    /// Directory battle logs are exported to
    #[arg(long, global = true, default_value = ".")]
    export_dir: PathBuf,

    /// Do not write log files
    #[arg(long, global = true)]
    no_export: bool,

    /// Print encounter results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// Generate and print a character
    Character,
    /// Generate and print an enemy
    Enemy,
    /// Character vs enemy
    Fight,
    /// Squad vs buffed enemy
    TeamFight,
    /// Fill, sort and liquidate a sample stash
    StashDemo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skirmish=warn")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_from_toml(path)?,
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Skirmish starting");

    let mut session = Session::new(config, args.player.clone(), seed)?;
    if !args.no_export {
        session = session.with_exporter(LogExporter::new(&args.export_dir));
    }

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&mut session, args.json)?,
        command => run_command(&mut session, command, args.json)?,
    }
    Ok(())
}

fn run_menu(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        println!("\n===== SKIRMISH =====");
        for line in MenuChoice::menu_lines() {
            println!("{}", line);
        }
        print!("Choose option: ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let command = match MenuChoice::parse(&input) {
            MenuChoice::GenerateCharacter => Command::Character,
            MenuChoice::GenerateEnemy => Command::Enemy,
            MenuChoice::SingleFight => Command::Fight,
            MenuChoice::TeamFight => Command::TeamFight,
            MenuChoice::Stash => Command::StashDemo,
            MenuChoice::Exit => break,
            MenuChoice::Invalid => {
                println!("Invalid option!");
                continue;
            }
        };
        run_command(session, command, json)?;
    }
    Ok(())
}

fn run_command(session: &mut Session, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Menu => run_menu(session, json)?,
        Command::Character => println!("{}", session.generate_character()),
        Command::Enemy => println!("{}", session.generate_enemy()),
        Command::Fight => {
            let outcome = session.single_fight();
            print_outcome(&outcome, json)?;
        }
        Command::TeamFight => {
            let outcome = session.team_fight();
            print_outcome(&outcome, json)?;
        }
        Command::StashDemo => stash_demo(session)?,
    }
    Ok(())
}

fn print_outcome(outcome: &EncounterOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        for line in outcome.log.lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn stash_demo(session: &mut Session) -> Result<()> {
    let loot = [
        Item::weapon("Excalibur", 5000.0, Rarity::Legendary)?,
        Item::trash("Broken Bone", 5.0, Rarity::Common)?,
        Item::potion("Health Potion", 50.0, Rarity::Rare)?,
    ];
    for item in loot {
        if let Err(err) = session.loot(item) {
            println!("{}", err);
        }
    }

    println!("{}", session.stash);
    println!("Sorting...");
    session.stash.sort();
    println!("{}", session.stash);

    let gold = session.stash.liquidate();
    println!("Trash liquidated for {} gold", gold);
    println!("{}", session.stash);

    for board in [&session.fights_won, &session.bosses_slain] {
        for line in board.display_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}
