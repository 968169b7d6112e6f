use anyhow::Result;
use weekmenu::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
