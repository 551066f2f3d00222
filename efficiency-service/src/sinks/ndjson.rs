use futures::StreamExt;
use serde::Serialize;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};

use crate::pipeline::{Envelope, PipelineError, Sink};

/// Writes each payload as one JSON line.
///
/// Upstream errors are logged and skipped; write failures end the run.
pub struct NdjsonSink<W> {
    writer: Mutex<W>,
}

impl<W> NdjsonSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait::async_trait]
impl<T, W> Sink<T> for NdjsonSink<W>
where
    T: Serialize + Send + 'static,
    W: AsyncWrite + Unpin + Send,
{
    async fn run<S>(&self, mut input: S) -> Result<(), PipelineError>
    where
        S: futures::Stream<Item = Result<Envelope<T>, PipelineError>> + Send + Unpin + 'static,
    {
        let mut writer = self.writer.lock().await;
        let mut written: u64 = 0;
        let mut skipped: u64 = 0;

        while let Some(item) = input.next().await {
            let env = match item {
                Ok(env) => env,
                Err(e) => {
                    tracing::error!(error = %e, "error in upstream pipeline for NdjsonSink");
                    metrics::counter!("ndjson_sink_skipped_total").increment(1);
                    skipped += 1;
                    continue;
                }
            };

            let mut line = serde_json::to_vec(&env.payload)
                .map_err(|e| PipelineError::Sink(format!("failed to encode record: {e}")))?;
            line.push(b'\n');

            writer
                .write_all(&line)
                .await
                .map_err(|e| PipelineError::Sink(format!("failed to write record: {e}")))?;
            written += 1;
        }

        writer
            .flush()
            .await
            .map_err(|e| PipelineError::Sink(format!("failed to flush output: {e}")))?;

        metrics::counter!("ndjson_sink_written_total").increment(written);
        tracing::info!(written, skipped, "ndjson sink finished");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        value: f64,
    }

    #[tokio::test]
    async fn writes_one_line_per_record_and_skips_errors() {
        let sink = NdjsonSink::new(Vec::<u8>::new());
        let items = vec![
            Ok(Envelope::new(Row { name: "a", value: 1.5 })),
            Err(PipelineError::Transform("unknown".to_string())),
            Ok(Envelope::new(Row { name: "b", value: -2.0 })),
        ];

        Sink::<Row>::run(&sink, futures::stream::iter(items)).await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec![r#"{"name":"a","value":1.5}"#, r#"{"name":"b","value":-2.0}"#]);
    }
}
