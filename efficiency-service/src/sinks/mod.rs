pub mod ndjson;

pub use ndjson::NdjsonSink;
