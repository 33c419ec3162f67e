//! Terminal user interface

pub mod screens;
pub mod terminal;
