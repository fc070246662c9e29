/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The immutable photo catalog (catalog.rs)
/// - Per-cell tap/zoom/failure state (cell.rs)
/// - Startup configuration (config.rs)

pub mod catalog;
pub mod cell;
pub mod config;
pub mod data;
