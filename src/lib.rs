//! Catalog browsing core for a digitized herbarium specimen collection.
//!
//! `specimen-catalog` loads the specimen dataset once per session, tracks
//! the load through Idle / Loading / Loaded / Failed, and keeps a live,
//! case-insensitive text filter over the in-memory catalog. Everything a
//! renderer needs is exposed through [`state::CatalogState::view`].

pub mod catalog;
pub mod loader;
pub mod search;
pub mod specimen;
pub mod state;
pub mod types;
