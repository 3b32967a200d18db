//! Application module
//!
//! Configuration, logging, the background effect runner and the event loop
//! that ties them to the session.

mod config;
mod config_file;
mod event_loop;
mod logging;
mod worker;

pub use config::{exit_code, Config, Invocation};
pub use config_file::{ConfigFile, GeneralConfig, LogConfig, StyleSection, ViewerConfig, CONFIG_ENV};
pub use event_loop::run_app;
pub use logging::{init_logging, log_path};
pub use worker::{execute, EffectRunner};
