//! TaskBoard TUI Entry Point
//!
//! Usage:
//!   taskboard [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Config file (default: ~/.config/taskboard/taskboard.toml)
//!   --ascii            Use ASCII glyphs instead of unicode icons
//!   --no-mouse         Don't capture the mouse
//!   --log-file <PATH>  Write logs to a file instead of stderr

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskboard_core::{load_config, load_config_from_path, ConfigSource, TaskboardConfig};
use taskboard_tui::App;

/// A cozy single-screen task list for the terminal
#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(long, env = "TASKBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Use ASCII glyphs instead of unicode icons
    #[arg(long)]
    ascii: bool,

    /// Don't capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "TASKBOARD_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_ref())?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: taskboard requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin/stdout is piped or there is no -t on ssh.");
        std::process::exit(1);
    }

    let config = resolve_config(&args)?;
    let mouse = config.mouse;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&config);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Load the config file and environment, then apply CLI flags on top
fn resolve_config(args: &Args) -> anyhow::Result<TaskboardConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from_path(Some(path.clone()))
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config().context("loading default config")?,
    };

    if args.ascii {
        config.ascii_icons = true;
        config.set_source(ConfigSource::Cli);
    }
    if args.no_mouse {
        config.mouse = false;
        config.set_source(ConfigSource::Cli);
    }

    tracing::debug!(
        source = %config.source(),
        ascii = config.ascii_icons,
        mouse = config.mouse,
        "Configuration resolved"
    );

    Ok(config)
}

/// Install the tracing subscriber; `RUST_LOG` controls the filter
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }

    Ok(())
}
