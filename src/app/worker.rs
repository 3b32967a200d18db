//! Background effect runner using std::thread and mpsc channels
//!
//! Directory listings, file reads and highlighting run on a worker thread so
//! a slow disk or a large file never blocks key handling. Each completion comes back as a `Message`
//! carrying the request id it answers.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::{Effect, Message};
use crate::render::Highlighter;
use crate::tree::DirectoryLister;
use crate::viewer::{ContentBuffer, FileReader};

/// Run one I/O effect to completion
///
/// Returns `None` for effects that are not I/O (e.g. `Quit`).
pub fn execute(
    effect: Effect,
    lister: &dyn DirectoryLister,
    reader: &dyn FileReader,
    highlighter: &dyn Highlighter,
) -> Option<Message> {
    match effect {
        Effect::ListDirectory { id, path } => {
            let result = lister.list(&path);
            Some(Message::DirectoryListed { id, path, result })
        }
        Effect::ReadFile { id, path } => {
            let result = reader
                .read(&path)
                .map(|text| ContentBuffer::new(&path, &text, highlighter));
            Some(Message::FileRead { id, path, result })
        }
        Effect::Quit => None,
    }
}

/// Worker thread executing effects in the background
pub struct EffectRunner {
    /// Sender for effects to run
    request_tx: Sender<Effect>,
    /// Receiver for completions
    result_rx: Receiver<Message>,
    /// Handle to the worker thread
    _worker: JoinHandle<()>,
    /// Effects sent but not yet received back
    in_flight: usize,
}

impl EffectRunner {
    /// Spawn the worker thread
    pub fn new(
        lister: Arc<dyn DirectoryLister>,
        reader: Arc<dyn FileReader>,
        highlighter: Arc<dyn Highlighter>,
    ) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Effect>();
        let (result_tx, result_rx) = mpsc::channel::<Message>();

        let worker = thread::spawn(move || {
            Self::worker_loop(request_rx, result_tx, lister, reader, highlighter);
        });

        Self {
            request_tx,
            result_rx,
            _worker: worker,
            in_flight: 0,
        }
    }

    fn worker_loop(
        request_rx: Receiver<Effect>,
        result_tx: Sender<Message>,
        lister: Arc<dyn DirectoryLister>,
        reader: Arc<dyn FileReader>,
        highlighter: Arc<dyn Highlighter>,
    ) {
        while let Ok(effect) = request_rx.recv() {
            let message = execute(
                effect,
                lister.as_ref(),
                reader.as_ref(),
                highlighter.as_ref(),
            );
            let Some(message) = message else {
                continue;
            };
            // If the main thread has dropped, stop the worker
            if result_tx.send(message).is_err() {
                break;
            }
        }
    }

    /// Queue an I/O effect; `Quit` is not the runner's business and is ignored
    pub fn dispatch(&mut self, effect: Effect) {
        if effect == Effect::Quit {
            return;
        }
        if self.request_tx.send(effect).is_ok() {
            self.in_flight += 1;
        } else {
            log::error!("Effect worker has stopped");
        }
    }

    /// Take a finished completion if one is ready
    pub fn try_recv(&mut self) -> Option<Message> {
        match self.result_rx.try_recv() {
            Ok(message) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(message)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the next completion
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Message> {
        match self.result_rx.recv_timeout(timeout) {
            Ok(message) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(message)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of effects still running
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
