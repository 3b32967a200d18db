//! File logger setup
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<cache_dir>/splitview/splitview.log`.

use std::fs::{self, File};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Location of the log file
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("splitview").join("splitview.log"))
}

/// Install the file logger; returns the log path when logging is active
///
/// Failing to create the file leaves logging disabled.
pub fn init_logging(level: LevelFilter) -> Option<PathBuf> {
    if level == LevelFilter::Off {
        return None;
    }
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = File::create(&path).ok()?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, log_config, file).ok()?;
    Some(path)
}
