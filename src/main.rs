use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::DefaultTerminal;

use revu::app::App;
use revu::config::{self, ConfigResult};
use revu::error::RevuError;
use revu::service::{ReviewClient, Source, service_channels, spawn_worker};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "revu", version)]
#[command(about = "Browse sentiment summaries of places and products and submit reviews")]
struct Args {
    /// Base URL of the review service [default: http://127.0.0.1:5000]
    #[arg(long)]
    url: Option<String>,

    /// Dataset to search and summarise
    #[arg(long, value_enum)]
    source: Option<Source>,

    /// Config file [default: ~/.config/revu/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) if !path.exists() => {
            return Err(RevuError::Config(format!("{} does not exist", path.display())).into());
        }
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(url) = args.url {
        config.server.url = url;
    }
    if args.source.is_some() {
        config.search.source = args.source;
    }

    // Bad URLs fail here, before the terminal is switched to raw mode
    let client = ReviewClient::new(
        &config.server.url,
        Duration::from_millis(config.server.timeout_ms),
    )?;
    log::info!("Using review service at {}", client.base_url());

    let (link, worker_channels) = service_channels();
    let worker = spawn_worker(client, worker_channels).map_err(RevuError::from)?;

    let mut app = App::new(&config, Some(link));
    if let Some(warning) = warning {
        log::warn!("{}", warning);
        app.notification.show_warning(&warning);
    }
    app.start();

    let terminal = ratatui::init();
    let _ = crossterm::execute!(std::io::stdout(), EnableBracketedPaste);
    let result = run(terminal, &mut app);
    let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    // Dropping the app closes the request channel and stops the worker
    drop(app);
    if worker.join().is_err() {
        log::warn!("Service worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_responses();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(EVENT_POLL_INTERVAL)?;

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Logs go to a file only; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(RevuError::from)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("revu=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    Ok(())
}
