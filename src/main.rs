//! Math Magician Quest - arithmetic practice in the terminal
//!
//! Single-session, self-contained CLI application.
//! Pick an operation, answer generated problems, build a streak.

mod cli;
mod config;
mod error;
mod problem;
mod session;

use clap::Parser;
use cli::display::summary_lines;
use cli::{Command, Display, InputHandler};
use config::{GameConfig, Overrides, DEFAULT_CONFIG_PATH};
use error::{AppError, AppResult};
use problem::{Operation, SystemRandom};
use session::{FeedbackTimer, SessionState};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "Math Magician Quest")]
#[command(about = "Practice addition, subtraction, multiplication and division")]
struct Args {
    /// Operation to start with
    #[arg(short, long, value_enum)]
    operation: Option<Operation>,

    /// Seed for reproducible problem sequences
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long feedback stays on screen (milliseconds)
    #[arg(long)]
    feedback_delay_ms: Option<u64>,

    /// Path to JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write logs to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Logs go to a file since the game owns the terminal
fn init_logging(log_file: Option<&Path>, debug: bool) -> AppResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let default_filter = if debug {
        "math_quest=debug"
    } else {
        "math_quest=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Event loop: runs until the player exits
fn run(
    display: &Display,
    input: &InputHandler,
    session: &mut SessionState,
    timer: &mut FeedbackTimer,
    rng: &mut SystemRandom,
) -> AppResult<()> {
    let mut dirty = true;

    loop {
        if timer.is_pending() {
            if let Some(token) = timer.poll(Instant::now()) {
                dirty |= session.advance(token, rng);
            }
        }

        if dirty {
            display.render(session)?;
            dirty = false;
        }

        // Timeout: keep polling the timer
        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(command) = InputHandler::command(&key) else {
            continue;
        };

        match command {
            Command::Exit => return Ok(()),
            Command::Reset => session.reset(rng),
            Command::SelectOperation(op) => session.select_operation(op, rng),
            Command::NextOperation => {
                let op = session.current_operation().next();
                session.select_operation(op, rng);
            }
            Command::PreviousOperation => {
                let op = session.current_operation().previous();
                session.select_operation(op, rng);
            }
            // Input is locked while feedback is showing
            Command::Submit | Command::Backspace | Command::Type(_)
                if !session.accepts_input() =>
            {
                continue;
            }
            Command::Submit => match session.submit_answer() {
                Some(token) => timer.schedule(token, Instant::now()),
                None => continue,
            },
            Command::Backspace => {
                let mut text = session.pending_input().to_string();
                text.pop();
                session.record_input(text);
            }
            Command::Type(c) => {
                let mut text = session.pending_input().to_string();
                text.push(c);
                session.record_input(text);
            }
        }

        dirty = true;
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = GameConfig::load(&args.config)?.with_overrides(Overrides {
        operation: args.operation,
        feedback_delay_ms: args.feedback_delay_ms,
        seed: args.seed,
        log_file: args.log_file.clone(),
    })?;

    init_logging(config.log_file.as_deref(), args.debug)?;

    match &config.source {
        Some(path) => tracing::info!(path = %path.display(), "config loaded"),
        None => tracing::warn!(
            path = %args.config.display(),
            "config file not found, using defaults"
        ),
    }
    tracing::info!(
        operation = %config.default_operation,
        seed = ?config.seed,
        feedback_delay_ms = config.feedback_delay_ms,
        "starting session"
    );

    let mut rng = SystemRandom::new(config.seed);
    let mut session = SessionState::new(config.default_operation, &mut rng);
    let mut timer = FeedbackTimer::new(config.feedback_delay());

    InputHandler::enable_raw_mode()?;
    let display = match Display::alternate() {
        Ok(display) => display,
        Err(e) => {
            let _ = InputHandler::disable_raw_mode();
            return Err(e.into());
        }
    };
    let input = InputHandler::new();

    let result = run(&display, &input, &mut session, &mut timer, &mut rng);

    // Restores the terminal before anything is printed
    drop(display);
    result?;

    for line in summary_lines(&session) {
        println!("{}", line);
    }
    tracing::info!(
        score = session.score(),
        completed = session.completed_count(),
        best_streak = session.stats().best_streak(),
        "session ended"
    );
    println!("Thanks for practicing!");

    Ok(())
}
