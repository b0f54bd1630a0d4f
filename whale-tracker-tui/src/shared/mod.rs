/// Shared modules for the Whale Tracker TUI
pub mod assets;
pub mod config;
pub mod format;
pub mod input;
pub mod state;
pub mod theme;
pub mod view;
pub mod widget;
