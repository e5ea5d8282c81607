//! Backend for the homestay permit workflow.

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod testing;
pub mod workflows;
