//! absurda - AI Absurditeiten CLI library
//!
//! This library provides the core functionality for the absurda generator:
//! the Gemini provider boundary, the bounded per-kind history stores, the
//! shareable-token codec, and the content kind definitions.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `providers`: generation service abstraction and the Gemini implementation
//! - `storage`: bounded JSON history stores and the stored API credential
//! - `share`: URL-safe token encoding/decoding for shared items
//! - `content`: the eight content kinds (items, prompts, request parameters)
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use absurda::content::tongbreker::Tongbreker;
//! use absurda::storage::HistoryStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store: HistoryStore<Tongbreker> =
//!         HistoryStore::open(absurda::content::tongbreker::STORAGE_KEY, None)?;
//!     for item in store.get_all() {
//!         println!("{}", item.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod providers;
pub mod share;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use content::ContentKind;
pub use error::{AbsurdaError, Result};

#[cfg(test)]
pub mod test_utils;
