use anyhow::{bail, Result};
use efficiency_service::{
    config::AppConfig,
    observability,
    pipeline::Pipeline,
    scenario::{Scenario, ScenarioReport},
    sinks::NdjsonSink,
    sources::ScenarioCsvFileSource,
    transform,
};
use std::{env, sync::Arc};
use tokio::io::AsyncWrite;

async fn run<W>(source: ScenarioCsvFileSource, sink: NdjsonSink<W>) -> Result<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let pipeline: Pipeline<_, Scenario, ScenarioReport, _> = Pipeline {
        source,
        transform: Arc::new(transform::AnalyzeScenario),
        sink,
    };

    pipeline.run().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: batch_report <scenarios_csv_path> [output_ndjson_path]");
    }
    let input_path = &args[1];

    // Defaults for blank hours/rate columns come from the same config as the API.
    let cfg = AppConfig::load()?;
    let source = ScenarioCsvFileSource::new(input_path, cfg.defaults);

    match args.get(2) {
        Some(output_path) => {
            let file = tokio::fs::File::create(output_path).await?;
            run(source, NdjsonSink::new(file)).await?;
            tracing::info!(input = %input_path, output = %output_path, "batch report written");
        }
        None => run(source, NdjsonSink::new(tokio::io::stdout())).await?,
    }

    Ok(())
}
