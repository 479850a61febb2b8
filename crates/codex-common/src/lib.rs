//! Common utilities for the Codex text toolkit.
//!
//! This crate provides shared infrastructure used by every toolkit component:
//! - **Warning System** - colored, deduplicated terminal warnings
//! - **Configuration** - the explicit [`config::TextConfig`] passed to each entry point

pub mod config;
pub mod warning;
