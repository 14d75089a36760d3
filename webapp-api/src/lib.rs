//! Diagnostic HTTP backend for the containerized terraform-webapp demo.
//!
//! Serves health, status, config, metrics and echo endpoints over JSON and
//! keeps a single process-wide request counter.

pub mod config;
pub mod handlers;
pub mod startup;
pub mod state;
