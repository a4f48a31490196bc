//! Noughts - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, EngineConfig, GameController, GameEvent, HumanTurn, Player,
    Position,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            seed,
        } => run_play(config, delay_ms, seed).await,
        Command::Config => {
            print!("{}", EngineConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Runs the interactive game loop on stdin/stdout.
async fn run_play(path: Option<PathBuf>, delay_ms: Option<u64>, seed: Option<u64>) -> Result<()> {
    let config = EngineConfig::resolve(
        path,
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        DEFAULT_CONFIG_PATH,
        delay_ms,
        seed,
    )
    .context("Failed to load config")?;
    info!(?config, "Starting game");

    let (mut controller, mut events) = GameController::new(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("You are X. Enter a cell (1-9) or a name like \"center\"; r to restart, q to quit.");
    println!("{}", controller.snapshot().await.board());

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => controller.reset_game().await,
            _ => match Position::parse(input) {
                Some(pos) => {
                    let turn = controller.process_human_move(pos.to_index()).await;
                    debug!(?turn, "Human move handled");
                    if let HumanTurn::Ignored(reason) = turn {
                        println!("{reason}.");
                    }
                    controller.wait_for_reply().await;
                }
                None => println!("Unknown cell {input:?}."),
            },
        }
        render_events(&mut events);
    }

    println!("Final score: {}", controller.snapshot().await.scores());
    Ok(())
}

/// Prints everything the controller reported since the last call.
fn render_events(events: &mut mpsc::UnboundedReceiver<GameEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            GameEvent::MoveMade { player, position } => match player {
                Player::Human => println!("You played {position}."),
                Player::Computer => println!("Computer played {position}."),
            },
            GameEvent::BoardChanged(board) => println!("{board}\n"),
            GameEvent::ComputerThinking => println!("Computer is thinking..."),
            GameEvent::GameOver { alert, scores, .. } => {
                println!("{}\n{}", alert.title(), alert.message());
                println!("Score: {scores}");
                println!("Type r to {}", alert.button().to_lowercase().trim_end_matches('!'));
            }
            GameEvent::Reset => println!("New game.\n{}\n", noughts::Board::new()),
        }
    }
}
