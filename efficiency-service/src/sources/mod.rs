pub mod scenario_csv_file;

pub use scenario_csv_file::ScenarioCsvFileSource;
