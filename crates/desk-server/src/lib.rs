//! # desk-server
//!
//! HTTP surface for Desk:
//! - JSON API under `/incidents` for programmatic clients
//! - Server-rendered incident board under `/board`
//! - `/health` for load balancers
//!
//! The `desk` binary in `main.rs` loads configuration, opens the database,
//! and serves the router built by [`server::build_router`].

pub mod board;
pub mod error;
pub mod extractors;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_router, serve};
pub use state::AppState;
