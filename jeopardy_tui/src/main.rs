use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use app::App;
use clap::Parser;
use jeopardy_client::{BoardController, GameConfig, HttpSource, DEFAULT_BASE_URL};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use view::Screen;

mod app;
mod terminal;
mod view;

#[derive(Parser)]
struct Args {
    /// Base URL of the trivia service's API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// How many categories (columns) to put on the board
    #[arg(short = 'c', long, default_value_t = GameConfig::default().num_categories)]
    num_categories: usize,

    /// How many candidate categories to pick from
    #[arg(short, long, default_value_t = GameConfig::default().pool_size)]
    pool_size: usize,

    /// Timeout for each request to the trivia service, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file. Without it, nothing is logged, since the
    /// terminal is taken up by the board.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level, args.log_file.as_deref())?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, base_url = %args.base_url);

    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let source = HttpSource::new(args.base_url, Duration::from_secs(args.timeout_secs))?;
    let config = GameConfig {
        num_categories: args.num_categories,
        pool_size: args.pool_size,
    };
    let controller = BoardController::new(
        Arc::new(source),
        Screen::default(),
        config,
        StdRng::seed_from_u64(seed),
    );
    let mut app = App::new(controller, runtime.handle().clone());

    let (mut terminal, _guard) = terminal::init()?;
    app.run(&mut terminal)?;

    info!("Bye");
    Ok(())
}

fn initialize_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
