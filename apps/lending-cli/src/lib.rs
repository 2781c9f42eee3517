//! # Lending Ledger Console
//!
//! Menu-driven console front end for `lending-core`.
//!
//! ## Module Organization
//! ```text
//! lending_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── Session-ending errors
//! ├── prompt.rs       ◄─── ask_int / ask_line / say
//! ├── session.rs      ◄─── Menu loop and dispatch
//! └── commands/
//!     ├── mod.rs      ◄─── Command numbers, listing helper
//!     ├── catalog.rs  ◄─── Item and loan commands
//!     └── registry.rs ◄─── Borrower commands
//! ```
//!
//! ## Streams
//! The menu, prompts, and status lines go to stdout. Logs go to stderr so
//! they never interleave with the prompt/response stream.

pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{OutputFormat, SessionConfig};
pub use error::{CliError, CliResult};
pub use prompt::{ConsolePrompt, Prompt};
pub use session::Session;

/// Runs one console session over stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration from the environment
/// 2. Initialize logging (stderr, env filter)
/// 3. Run the menu loop until command 0 or end of input
pub fn run() -> CliResult<()> {
    let config = SessionConfig::load()?;
    init_tracing(&config);

    info!(output = ?config.output, "Starting lending ledger session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = ConsolePrompt::new(stdin.lock(), stdout.lock());

    Session::new(config).run(&mut prompt)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `LENDING_LOG=lending_core=debug` - Per-operation ledger events
/// - Default: `warn,lending_cli=info,lending_core=info`
fn init_tracing(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
