//! Pull-up console demo - Entry Point

use clap::Parser;
use pullup_console::config::{CliOverrides, Profile};
use pullup_console::console_log;
use pullup_console::model::Severity;
use pullup_console::state::{MessageStore, PanelState};
use pullup_console::view::{ColorConfig, ViewOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Pull-up console - demo host for the in-app diagnostic console
#[derive(Parser, Debug)]
#[command(name = "pullup")]
#[command(version)]
#[command(about = "Terminal demo of a pull-up diagnostic console")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Capacity and padding defaults to start from
    #[arg(long, value_parser = Profile::NAMES)]
    pub profile: Option<String>,

    /// Maximum number of messages retained
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub capacity: Option<u32>,

    /// Blank lines seeded into the console at startup
    #[arg(long)]
    pub padding: Option<u32>,

    /// Show message timestamps on startup
    #[arg(long)]
    pub timestamps: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Log a trace message from a background thread every MS milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub ticker: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Profile defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pullup_console::config::load_config_with_precedence(args.config.clone())?;
        let merged = pullup_console::config::merge_config(config_file);
        let with_env = pullup_console::config::apply_env_overrides(merged)?;

        let cli = CliOverrides {
            profile: args.profile.as_deref().map(str::parse::<Profile>).transpose()?,
            capacity: args.capacity.map(|n| n as usize),
            padding: args.padding.map(|n| n as usize),
            show_timestamps: args.timestamps.then_some(true),
        };
        pullup_console::config::apply_cli_overrides(with_env, cli)
    };

    pullup_console::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Padding that does not fit the capacity is a startup error.
    let mut store = MessageStore::from_profile(config.store)?;
    store.set_enabled(config.enabled);
    let panel = PanelState::new(config.panel);

    let (handle, inbox) = pullup_console::console::channel(config.enabled);
    pullup_console::console::install(handle.clone())?;

    if let Some(ms) = args.ticker {
        spawn_ticker(Duration::from_millis(ms));
    }

    let options = ViewOptions {
        show_timestamps: config.show_timestamps,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };
    pullup_console::view::run(store, panel, handle, inbox, options)?;

    Ok(())
}

/// Background producer logging through the process-wide console.
fn spawn_ticker(interval: Duration) {
    std::thread::spawn(move || {
        let mut tick: u64 = 0;
        loop {
            std::thread::sleep(interval);
            tick += 1;
            console_log!(Severity::Trace; "background tick {}", tick);
        }
    });
}
