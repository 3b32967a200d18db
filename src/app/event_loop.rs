//! Main event loop for the application

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use super::config::{exit_code, Config};
use super::worker::EffectRunner;
use crate::core::{Effect, Message, Session};
use crate::error::SplitviewError;
use crate::render::highlighter_for;
use crate::tree::FsLister;
use crate::viewer::FsReader;
use crate::watcher::FileWatcher;

/// How long to wait for a terminal event before checking completions
const POLL_INTERVAL: Duration = Duration::from_millis(60);
/// Upper bound on waiting for the root listing before the first frame
const STARTUP_WAIT: Duration = Duration::from_secs(2);

/// Feed one message through the session and queue what it asks for
///
/// Returns true when the session asked to quit.
fn pump(session: &mut Session, runner: &mut EffectRunner, msg: &Message) -> bool {
    let mut quit = false;
    for effect in session.update(msg) {
        if effect == Effect::Quit {
            quit = true;
        } else {
            runner.dispatch(effect);
        }
    }
    quit
}

/// Translate a terminal event; only key presses and resizes matter
fn to_message(ev: Event) -> Option<Message> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Run the browser until the user quits; returns the exit code
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<i32> {
    let style = config.style();
    let highlighter = highlighter_for(&style);
    let (mut session, init) = Session::new(&config.root, config.tree, style);
    let mut runner = EffectRunner::new(
        Arc::new(FsLister),
        Arc::new(FsReader::new(config.max_file_bytes)),
        highlighter,
    );
    log::info!("Browsing {}", config.root.display());

    // The root listing lands before the first frame
    for effect in init {
        runner.dispatch(effect);
    }
    let deadline = Instant::now() + STARTUP_WAIT;
    while runner.in_flight() > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Some(msg) = runner.recv_timeout(remaining) else {
            log::warn!("Root listing still pending after {:?}", STARTUP_WAIT);
            break;
        };
        pump(&mut session, &mut runner, &msg);
    }

    let size = terminal.size()?;
    pump(
        &mut session,
        &mut runner,
        &Message::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let watcher = if config.watch {
        match FileWatcher::new(&config.root) {
            Ok(w) => Some(w),
            Err(e) => {
                log::warn!("File watching disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    loop {
        terminal
            .draw(|frame| session.render(frame))
            .map_err(|e| SplitviewError::terminal(e.to_string()))?;

        while let Some(msg) = runner.try_recv() {
            pump(&mut session, &mut runner, &msg);
        }

        if let Some(paths) = watcher.as_ref().and_then(|w| w.poll()) {
            log::debug!("{} path(s) changed on disk", paths.len());
            pump(&mut session, &mut runner, &Message::FilesChanged(paths));
        }

        if event::poll(POLL_INTERVAL)? {
            let Some(msg) = to_message(event::read()?) else {
                continue;
            };
            if pump(&mut session, &mut runner, &msg) {
                log::info!("Quit requested");
                return Ok(exit_code::SUCCESS);
            }
        }
    }
}
