//! splitview - a two-pane terminal file browser

use std::io::{self, stdout};
use std::process::ExitCode;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use splitview::app::{exit_code, init_logging, run_app, Config};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Some(path) = init_logging(config.log_level) {
        log::info!("splitview {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
    if let Some(warning) = &config.config_warning {
        log::warn!("{}; using defaults", warning);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = terminal::disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, config));

    // Restore terminal whatever happened
    settle(result, restore_terminal())
}

/// Leave raw mode and the alternate screen; both steps run even if one fails
fn restore_terminal() -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// Report the first error: the run's own, then the restore's
fn settle(result: anyhow::Result<i32>, restored: io::Result<()>) -> anyhow::Result<i32> {
    if let (Err(_), Err(e)) = (&result, &restored) {
        log::error!("Cannot restore terminal: {}", e);
    }
    let code = result?;
    restored?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_error_wins_over_restore_error() {
        let result = settle(
            Err(anyhow::anyhow!("run failed")),
            Err(io::Error::other("restore failed")),
        );
        assert_eq!(result.unwrap_err().to_string(), "run failed");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_run() {
        let result = settle(Ok(0), Err(io::Error::other("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
    }

    #[test]
    fn test_clean_run_keeps_exit_code() {
        assert_eq!(settle(Ok(0), Ok(())).unwrap(), exit_code::SUCCESS);
    }
}
