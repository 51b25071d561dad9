//! Common library for the MEAL MIS application
//!
//! This crate provides shared infrastructure used by the API service:
//! database connectivity, connection pooling, and error handling.

pub mod database;
pub mod error;
