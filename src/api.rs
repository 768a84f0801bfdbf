//! Command layer consumed by the webview bridge.

pub mod commands;
