use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use vodloop_api::{ApiConfig, VideosClient};
use vodloop_player::{PlaybackState, PlayerHandle, QueueEngine};

mod cli;
mod error;

use cli::CliArgs;
use error::AppError;

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn bootstrap() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    info!("vodloop - sequential VOD queue player");
    info!(base_url = %args.base_url, "using catalogue service");

    let config = ApiConfig::new(&args.base_url).with_timeout(Duration::from_secs(args.timeout));
    let client = VideosClient::new(&config)?;

    // the first fetch starts as soon as the player task is up
    let player = vodloop_player::spawn(QueueEngine::new(), client);

    run_transport_ui(player).await
}

/// Interactive loop: stdin lines become transport intents, state changes
/// are rendered as they are published.
async fn run_transport_ui(player: PlayerHandle) -> Result<(), AppError> {
    let mut state_rx = player.subscribe();
    let spinner = ProgressBar::new_spinner();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    spinner.println("commands: n = next, p = previous, t = play/pause, c = controls, r = refresh, q = quit");
    render(&spinner, &state_rx.borrow_and_update().clone());

    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    // player task ended
                    break;
                }
                let state = state_rx.borrow_and_update().clone();
                render(&spinner, &state);
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "n" => player.request_next(),
                    "p" => player.request_previous(),
                    "" | "t" => player.request_play_pause(),
                    "c" => player.request_toggle_controls(),
                    "r" => player.refresh(),
                    "q" => break,
                    other => spinner.println(format!("unknown command {other:?} (n/p/t/c/r/q)")),
                }
            },
        }
    }

    spinner.finish_and_clear();
    player.close().await;
    Ok(())
}

fn render(spinner: &ProgressBar, state: &PlaybackState) {
    if state.is_loading {
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner.set_message("loading catalogue...");
    } else {
        spinner.disable_steady_tick();
        spinner.set_message("");
    }

    let transport = if state.is_playing { "playing" } else { "paused" };
    match &state.current {
        Some(item) => {
            let prev = if state.has_previous { "<" } else { " " };
            let next = if state.has_next { ">" } else { " " };
            let controls = if state.controls_visible {
                "controls shown"
            } else {
                "controls hidden"
            };
            spinner.println(format!(
                "[{transport}] {prev} {} by {} {next} ({controls})",
                item.title, item.author_name
            ));
        }
        None if !state.is_loading => {
            spinner.println(format!("[{transport}] queue empty"));
        }
        None => {}
    }
}
