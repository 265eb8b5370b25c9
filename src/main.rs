use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

use stickynote::app::config::{self, AppConfig};
use stickynote::app::{r#loop::run_loop, state::AppState};
use stickynote::cli::Args;
use stickynote::infrastructure::json_file::JsonFileStore;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn load_config(args: &Args) -> AppConfig {
    let Some(path) = args.config.clone().or_else(config::default_config_path) else {
        return AppConfig::default();
    };
    AppConfig::load(&path).unwrap_or_else(|e| {
        warn!(error = %e, "using default configuration");
        AppConfig::default()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is optional; keep the guard alive for the whole run.
    let _log_guard = config::config_dir().and_then(|dir| {
        stickynote::logging::init(&dir.join("logs"))
            .map_err(|e| eprintln!("logging disabled: {e}"))
            .ok()
    });

    setup_panic_hook();

    // Everything that can fail on bad input happens before raw mode.
    let overrides = args.overrides();
    let mut config = load_config(&args);
    if let Some(theme) = overrides.theme {
        config.theme = theme;
    }
    let (commands_path, policy) = config::resolve_startup(&overrides, &config);
    info!(path = %commands_path.display(), policy = policy.label(), "starting");

    let mut app_state = AppState::new(&config);
    app_state.commands_path = commands_path;
    app_state.missing_file_policy = policy;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, Arc::new(JsonFileStore::new())).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}
