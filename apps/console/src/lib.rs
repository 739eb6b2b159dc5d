//! # Roster Console Library
//!
//! A line-oriented presentation layer over [`roster_core::RosterStore`].
//!
//! ## Module Organization
//! ```text
//! roster_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── commands.rs     ◄─── Input line → Command
//! ├── shell.rs        ◄─── Command → store operation → render
//! ├── view.rs         ◄─── Table, form, total rendering
//! └── error.rs        ◄─── AppError
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod view;

use std::io;

use roster_core::RosterStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppResult;
use shell::Shell;

/// Runs the console against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load AppConfig from ROSTER_* environment variables                  │
/// │  2. Initialize tracing (stderr, RUST_LOG or config filter)              │
/// │  3. Build the RosterStore, seeded from ROSTER_SEED if set               │
/// │  4. Run the shell until `quit` or end of input                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let config = AppConfig::from_env();
    init_tracing(&config);

    info!("Starting roster console");

    let store = load_store(&config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    Shell::new(store, config.prompt.as_str()).run(stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=roster_core=trace` - Trace the store only
/// - Default: `AppConfig::log_filter`
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the store, reading the seed file when one is configured.
pub fn load_store(config: &AppConfig) -> AppResult<RosterStore> {
    let Some(path) = &config.seed_path else {
        return Ok(RosterStore::new());
    };

    let json = std::fs::read_to_string(path)?;
    let store = RosterStore::from_json(&json)?;
    info!(path = %path.display(), records = store.len(), "Roster seeded");
    Ok(store)
}
