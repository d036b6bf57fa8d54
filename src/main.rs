use anyhow::Context;
use kafka_lite::adapters::incoming::tcp_adapter::TcpAdapter;
use kafka_lite::config::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let properties_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "server.properties".to_string());
    let config = AppConfig::new(&properties_path);

    let adapter = TcpAdapter::new("0.0.0.0:9092", config.broker)
        .await
        .context("failed to bind listener on port 9092")?;

    adapter.run().await?;

    Ok(())
}
