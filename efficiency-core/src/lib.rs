pub mod analysis;
pub mod catalog;
pub mod domain;

pub use analysis::{analyze, AnalysisResult};
pub use catalog::CatalogError;
