//! TUI screens

pub mod chat;
