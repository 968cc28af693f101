//! # Crash Statistics Backend
//!
//! Filtering and aggregation engine for the Victorian road crash dataset.
//!
//! The crate loads the crash statistics CSV once, then answers dashboard
//! requests: it selects the accidents matching a date window and the chosen
//! accident types and light conditions, sums persons involved per category,
//! averages them per hour of day, and decides which charts the page shows.
//! The backend exposes a REST API via Axum for the dashboard front end.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the source CSV with polars into typed records
//! - **Selection**: Date window plus categorical predicates, source order kept
//! - **Aggregation**: Per-category totals and hourly averages
//! - **Advisories**: Non-fatal warnings about the requested date range
//! - **Export**: The unfiltered dataset as a CSV download
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`parsing`]: CSV and date/time parsing
//! - [`io`]: Dataset loading, checksum, export
//! - [`store`]: The process-wide dataset
//! - [`services`]: Selection, aggregation and chart visibility
//! - [`routes`]: Route-specific data types
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
