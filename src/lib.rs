//! Dockhand - Docker container TUI
//!
//! A terminal user interface for starting and stopping Docker containers.

pub mod app;
pub mod config;
pub mod core;
pub mod docker;
pub mod state;
pub mod ui;
