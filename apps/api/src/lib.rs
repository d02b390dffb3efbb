//! PathFinder API — static opportunity catalog plus a deterministic,
//! template-based resume analysis endpoint, with the SPA served behind them.
//!
//! The router and all domain logic live here so integration tests can drive
//! the real `Router` without binding a socket; `main.rs` only bootstraps.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod opportunities;
pub mod routes;
pub mod state;
