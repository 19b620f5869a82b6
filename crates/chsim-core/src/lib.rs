//! Core types and definitions for the CH-SIMULATOR kernel dashboard.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the blip component, commands, snapshot views, events, and constants.
//! It has no dependency on any UI or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
