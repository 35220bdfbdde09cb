use anyhow::Result;
use campusbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
