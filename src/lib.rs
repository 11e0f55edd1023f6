//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfall::{core,input,term,types}` and
//! hosts the pieces of the terminal shell that are worth testing on their own:
//! configuration loading and the session event log.

pub mod config;
pub mod event_log;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
