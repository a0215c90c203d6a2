mod cli;
mod infra;
mod report;
mod routes;
mod server;

use skills_funding::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
