//! Handler module - key bindings for the two panes

pub mod key;

pub use key::{
    global_action, scroll_action, tree_action, GlobalAction, ScrollAction, TreeAction, HELP_LINES,
};
