//! Dashboard renderer for lottery grid testing statistics.
//!
//! Loads the `stats/*.json` documents published by the grid testing service
//! and turns them into HTML: a performance summary, a recent draws table and
//! a per-game results table.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod page;
pub mod render;
