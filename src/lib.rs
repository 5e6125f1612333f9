//! Attack Board Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod sheets;

pub use config::Config;
pub use error::{AppError, Result};
pub use sheets::{RowStore, SheetsClient};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RowStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given row store and configuration
    pub fn new(store: Arc<dyn RowStore>, config: Config) -> Self {
        Self { store, config }
    }
}
