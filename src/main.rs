use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    grove_harness::app::run().await
}
