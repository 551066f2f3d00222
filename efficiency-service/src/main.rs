use anyhow::Result;
use efficiency_core::catalog;
use efficiency_service::{api, config::AppConfig, metrics_server, observability};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    tracing::info!(
        categories = catalog::records().len(),
        default_hours_per_day = cfg.defaults.hours_per_day,
        default_electricity_rate = cfg.defaults.electricity_rate,
        "starting appliance efficiency API"
    );

    api::serve(&cfg.server.http_bind_addr, cfg.defaults).await
}
