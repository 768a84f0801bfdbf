//! Command modules for the widget bridge
//!
//! Thin adapters between the wire types and the core: DTO in, core call,
//! DTO/notice out. The host bridge wires these functions to whatever IPC it
//! uses; nothing in here renders or blocks.
//!
//! - `converter`: unit listing, conversion, quick-entry parsing
//! - `favorites`: saved-conversion CRUD with its notice flow
//! - `settings`: settings persistence

pub mod converter;
pub mod favorites;
pub mod settings;
