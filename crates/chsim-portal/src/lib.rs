//! Client side of the managed backend behind the CH-SIMULATOR pages.
//!
//! The backend itself (credential store, `news` table) is external; this
//! crate defines the calls the pages make against it, an in-memory backend
//! with the same behavior for tests and headless runs, and the page actions
//! that turn call results into routes.

pub mod actions;
pub mod backend;
pub mod error;
pub mod memory;
pub mod model;

pub use backend::PortalBackend;
pub use error::PortalError;
pub use memory::InMemoryBackend;
