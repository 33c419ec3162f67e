//! TUI chat interface module
//!
//! Ratatui-based interactive chat screen:
//! - state.rs: chat state management
//! - ui.rs: rendering
//! - input.rs: keyboard and command handling
//! - runner.rs: event loop coordination

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::{ChatResult, run_chat};
pub use state::{ChatMessage, ChatState, MessageRole};
