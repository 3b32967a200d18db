//! Core module - messages, effects and the session state machine

pub mod message;
pub mod mode;
pub mod session;

pub use message::{Effect, Message, RequestId, RequestIds};
pub use mode::{PaneLayout, SessionState};
pub use session::Session;
