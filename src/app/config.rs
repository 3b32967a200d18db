//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use super::config_file::{ConfigFile, StyleSection};
use crate::error::{Result, SplitviewError};
use crate::render::StyleConfig;
use crate::tree::TreeOptions;

/// Process exit codes
///
/// - `SUCCESS` (0): Normal exit (Ctrl+C, --help, --version)
/// - `ERROR` (2): Runtime error (terminal setup or drawing failed)
/// - `INVALID` (3): Invalid command-line arguments or paths
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, missing path)
    pub const INVALID: i32 = 3;
}

/// What the command line asked for
#[derive(Debug)]
pub enum Invocation {
    /// Start the browser
    Run(Config),
    /// Print usage and exit
    Help,
    /// Print the version and exit
    Version,
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Directory shown at the top of the tree
    pub root: PathBuf,
    /// Hidden file and ordering options for the tree
    pub tree: TreeOptions,
    /// Refresh the tree on filesystem changes
    pub watch: bool,
    /// Largest file the viewer will load
    pub max_file_bytes: u64,
    pub log_level: LevelFilter,
    /// Config file problem to report once logging is up
    pub config_warning: Option<String>,
    style_section: StyleSection,
    line_numbers: bool,
}

impl Config {
    /// Parse the process arguments on top of the config file
    ///
    /// `--help` and `--version` are handled here and exit the process.
    pub fn from_args() -> Result<Self> {
        let (file, warning) = match ConfigFile::load() {
            Ok(file) => (file, None),
            Err(e) => (ConfigFile::default(), Some(e.to_string())),
        };

        match Self::parse(env::args().skip(1), file)? {
            Invocation::Run(mut config) => {
                config.config_warning = warning;
                Ok(config)
            }
            Invocation::Help => {
                print_help();
                std::process::exit(exit_code::SUCCESS);
            }
            Invocation::Version => {
                println!("sv {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(exit_code::SUCCESS);
            }
        }
    }

    /// Parse `args` (without the program name); CLI flags override `file`
    pub fn parse<I>(args: I, file: ConfigFile) -> Result<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        let mut root: Option<PathBuf> = None;
        let mut show_hidden: Option<bool> = None;
        let mut watch = file.general.watch;

        for arg in args {
            match arg.as_str() {
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--no-watch" => watch = false,
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                path if !path.starts_with('-') => {
                    if root.is_some() {
                        return Err(SplitviewError::usage(format!(
                            "Unexpected argument: {}",
                            path
                        )));
                    }
                    root = Some(resolve_root(path)?);
                }
                unknown => {
                    return Err(SplitviewError::usage(format!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    )));
                }
            }
        }

        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        Ok(Invocation::Run(Self {
            root,
            tree: TreeOptions {
                show_hidden: show_hidden.unwrap_or(file.general.show_hidden),
                dirs_first: file.general.dirs_first,
            },
            watch,
            max_file_bytes: file.viewer.max_file_bytes,
            log_level: file.log.level_filter(),
            config_warning: None,
            style_section: file.style,
            line_numbers: file.viewer.line_numbers,
        }))
    }

    /// Resolve the `[style]` section; bad colors are logged and replaced
    pub fn style(&self) -> StyleConfig {
        StyleConfig::from_section(&self.style_section, self.line_numbers)
    }
}

/// A directory is used as is; a file roots the tree at its parent
fn resolve_root(arg: &str) -> Result<PathBuf> {
    let path = PathBuf::from(arg);
    if path.is_dir() {
        Ok(path.canonicalize()?)
    } else if path.is_file() {
        let path = path.canonicalize()?;
        Ok(path.parent().map(PathBuf::from).unwrap_or(path))
    } else {
        Err(SplitviewError::usage(format!("Path does not exist: {}", arg)))
    }
}

fn print_help() {
    println!(
        r#"sv - splitview: a two-pane terminal file browser

USAGE:
    sv [OPTIONS] [PATH]

OPTIONS:
    -a, --hidden        Show hidden files
    --no-hidden         Hide hidden files (default)
    --no-watch          Do not refresh the tree when files change
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/splitview/config.toml    (override with SPLITVIEW_CONFIG)

KEYBINDINGS:
    j/↓  k/↑      Move cursor
    PgDn/PgUp     Page the tree
    g/G           Go to top / bottom
    l/→           Expand directory
    h/←           Collapse directory
    Enter         Toggle directory
    .             Toggle hidden files
    R/F5          Refresh
    p             Open the selected file
    J/K           Scroll the file (also Shift+↓/↑)
    Ctrl+f/b      Page the file
    Home/End      File top / bottom
    Ctrl+c        Quit"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str], file: ConfigFile) -> Config {
        match Config::parse(args(list), file).unwrap() {
            Invocation::Run(config) => config,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_to_current_dir() {
        let config = run(&[], ConfigFile::default());
        assert_eq!(config.root, env::current_dir().unwrap());
        assert!(!config.tree.show_hidden);
        assert!(config.watch);
    }

    #[test]
    fn test_directory_argument_is_root() {
        let dir = TempDir::new().unwrap();
        let config = run(&[dir.path().to_str().unwrap()], ConfigFile::default());
        assert_eq!(config.root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_file_argument_roots_at_parent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "# notes").unwrap();
        let config = run(&[file.to_str().unwrap()], ConfigFile::default());
        assert_eq!(config.root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        let result = Config::parse(args(&["/definitely/not/here"]), ConfigFile::default());
        assert!(matches!(result, Err(SplitviewError::Usage(_))));
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        let result = Config::parse(args(&["--frobnicate"]), ConfigFile::default());
        match result {
            Err(SplitviewError::Usage(msg)) => assert!(msg.contains("--frobnicate")),
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(
            Config::parse(args(&["-h"]), ConfigFile::default()),
            Ok(Invocation::Help)
        ));
        assert!(matches!(
            Config::parse(args(&["--version"]), ConfigFile::default()),
            Ok(Invocation::Version)
        ));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = ConfigFile::default();
        file.general.show_hidden = true;
        let config = run(&["--no-hidden", "--no-watch"], file);
        assert!(!config.tree.show_hidden);
        assert!(!config.watch);

        let config = run(&["-a"], ConfigFile::default());
        assert!(config.tree.show_hidden);
    }

    #[test]
    fn test_config_file_values_carry_through() {
        let mut file = ConfigFile::default();
        file.general.dirs_first = true;
        file.viewer.max_file_bytes = 10;
        file.viewer.line_numbers = false;
        file.style.border_enabled = false;
        let config = run(&[], file);
        assert!(config.tree.dirs_first);
        assert_eq!(config.max_file_bytes, 10);
        let style = config.style();
        assert!(!style.line_numbers);
        assert!(!style.border_enabled);
    }
}
