//! HTTP service and command-line entry points.

mod cli;
mod infra;
mod routes;
mod server;

use crate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
