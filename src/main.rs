//! Terminal falling-block runner (default binary).
//!
//! Sets up logging and the terminal, then runs one game on a current-thread
//! runtime until the quit key.

use anyhow::{Context, Result};

use tui_blocks::engine::{init_logging, log_path_from_env, run_game, EngineConfig, EngineError};
use tui_blocks::input::KeyboardService;
use tui_blocks::term::{BoardPrinter, TerminalRenderer};

fn main() -> Result<()> {
    // Logging first, so config fallbacks are recorded.
    init_logging(log_path_from_env().as_deref())?;
    let config = EngineConfig::from_env();
    tracing::info!(?config, "starting");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter().map_err(EngineError::Terminal)?;

    let result = rt.block_on(run_game(
        &config,
        |tx| KeyboardService::spawn(config.input, tx),
        BoardPrinter::stdout(),
    ));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game stopped");
    }
    Ok(result?)
}
