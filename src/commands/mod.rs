//! Command handlers for the CLI
//!
//! This module provides the handlers invoked by the CLI entrypoint:
//!
//! - `generate` — call Gemini for one item and save it to history
//! - `history`  — list, delete, and clear stored items
//! - `share`    — encode stored items to tokens and import tokens
//! - `auth`     — manage the stored Gemini API key
//!
//! The handlers are intentionally small and use the library components:
//! the provider boundary, the content kinds, and the bounded stores.

pub mod auth;
pub mod generate;
pub mod history;
pub mod share;
