use std::{pin::Pin, sync::Arc, time::SystemTime};

use futures::{Stream, StreamExt};

#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub payload: T,
    pub received_at: SystemTime,
}

impl<T> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            received_at: SystemTime::now(),
        }
    }

    /// Replace the payload, keeping the original receive time.
    pub fn map<U>(self, payload: U) -> Envelope<U> {
        Envelope {
            payload,
            received_at: self.received_at,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("source error: {0}")]
    Source(String),
    #[error("transform error: {0}")]
    Transform(String),
    #[error("sink error: {0}")]
    Sink(String),
}

pub type EnvelopeStream<T> = Pin<Box<dyn Stream<Item = Result<Envelope<T>, PipelineError>> + Send>>;

#[async_trait::async_trait]
pub trait Source<T>: Send + Sync {
    async fn stream(&self) -> EnvelopeStream<T>;
}

#[async_trait::async_trait]
pub trait Transform<I, O>: Send + Sync {
    async fn apply(&self, input: Envelope<I>) -> Result<Envelope<O>, PipelineError>;
}

#[async_trait::async_trait]
pub trait Sink<T>: Send + Sync {
    async fn run<S>(&self, input: S) -> Result<(), PipelineError>
    where
        S: Stream<Item = Result<Envelope<T>, PipelineError>> + Send + Unpin + 'static;
}

/// Source of `I`, one transform from `I` to `O`, sink of `O`.
///
/// Errors raised upstream travel down the stream untouched; the sink decides
/// what to do with them.
pub struct Pipeline<S, I, O, K> {
    pub source: S,
    pub transform: Arc<dyn Transform<I, O> + Send + Sync>,
    pub sink: K,
}

impl<S, I, O, K> Pipeline<S, I, O, K>
where
    I: Send + 'static,
    O: Send + 'static,
    S: Source<I> + Send + Sync + 'static,
    K: Sink<O> + Send + Sync + 'static,
{
    pub async fn run(self) -> Result<(), PipelineError> {
        let input = self.source.stream().await;

        let transform = self.transform;
        let output: EnvelopeStream<O> = Box::pin(input.then(move |item| {
            let t = transform.clone();
            async move {
                match item {
                    Ok(env) => t.apply(env).await,
                    Err(e) => Err(e),
                }
            }
        }));

        self.sink.run(output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct VecSource(Vec<Result<u32, String>>);

    #[async_trait::async_trait]
    impl Source<u32> for VecSource {
        async fn stream(&self) -> EnvelopeStream<u32> {
            let items: Vec<_> = self
                .0
                .iter()
                .cloned()
                .map(|r| r.map(Envelope::new).map_err(PipelineError::Source))
                .collect();
            Box::pin(futures::stream::iter(items))
        }
    }

    struct Double;

    #[async_trait::async_trait]
    impl Transform<u32, u64> for Double {
        async fn apply(&self, input: Envelope<u32>) -> Result<Envelope<u64>, PipelineError> {
            let doubled = u64::from(input.payload) * 2;
            Ok(input.map(doubled))
        }
    }

    #[derive(Default)]
    struct Collect {
        ok: Mutex<Vec<u64>>,
        errors: Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl Sink<u64> for Arc<Collect> {
        async fn run<S>(&self, mut input: S) -> Result<(), PipelineError>
        where
            S: Stream<Item = Result<Envelope<u64>, PipelineError>> + Send + Unpin + 'static,
        {
            while let Some(item) = input.next().await {
                match item {
                    Ok(env) => {
                        self.ok.lock().unwrap().push(env.payload);
                    }
                    Err(_) => {
                        *self.errors.lock().unwrap() += 1;
                    }
                }
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn pipeline_applies_transform_and_forwards_errors() {
        let sink = Arc::new(Collect::default());
        let pipeline: Pipeline<_, u32, u64, _> = Pipeline {
            source: VecSource(vec![Ok(1), Err("bad row".to_string()), Ok(5)]),
            transform: Arc::new(Double),
            sink: sink.clone(),
        };

        pipeline.run().await.unwrap();

        assert_eq!(*sink.ok.lock().unwrap(), vec![2, 10]);
        assert_eq!(*sink.errors.lock().unwrap(), 1);
    }
}
