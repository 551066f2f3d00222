use std::{fs::File, path::PathBuf};

use csv::StringRecord;

use crate::config::AnalysisDefaults;
use crate::pipeline::{Envelope, EnvelopeStream, PipelineError, Source};
use crate::scenario::Scenario;

/// CSV source of what-if `Scenario`s.
///
/// Expected header columns (by name):
/// - category
/// - hours_per_day (optional, falls back to the configured default)
/// - electricity_rate (optional, falls back to the configured default)
///
/// Numbers are taken as written; no range checks are applied.
pub struct ScenarioCsvFileSource {
    path: PathBuf,
    defaults: AnalysisDefaults,
}

impl ScenarioCsvFileSource {
    pub fn new<P: Into<PathBuf>>(path: P, defaults: AnalysisDefaults) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }
}

fn parse_optional_f64(column: &str, s: Option<&str>) -> Result<Option<f64>, PipelineError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|e| PipelineError::Source(format!("invalid {column} '{v}': {e}"))),
    }
}

pub(crate) fn record_to_scenario(
    record: &StringRecord,
    headers: &StringRecord,
    defaults: &AnalysisDefaults,
) -> Result<Scenario, PipelineError> {
    let get = |name: &str| -> Option<&str> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .and_then(|idx| record.get(idx))
    };

    let category = get("category")
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| PipelineError::Source("missing column 'category' in CSV record".to_string()))?
        .to_string();

    let hours_per_day = parse_optional_f64("hours_per_day", get("hours_per_day"))?
        .unwrap_or(defaults.hours_per_day);
    let electricity_rate = parse_optional_f64("electricity_rate", get("electricity_rate"))?
        .unwrap_or(defaults.electricity_rate);

    Ok(Scenario {
        category,
        hours_per_day,
        electricity_rate,
    })
}

#[async_trait::async_trait]
impl Source<Scenario> for ScenarioCsvFileSource {
    async fn stream(&self) -> EnvelopeStream<Scenario> {
        // Scenario files are small; the blocking CSV reader runs inline.
        // A bad row is yielded as an error and reading carries on.
        let path = self.path.clone();
        let defaults = self.defaults;
        let s = async_stream::stream! {
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    yield Err(PipelineError::Source(format!("failed to open scenario file: {e}")));
                    return;
                }
            };
            let mut rdr = csv::Reader::from_reader(file);
            let headers = match rdr.headers() {
                Ok(h) => h.clone(),
                Err(e) => {
                    yield Err(PipelineError::Source(format!("failed to read CSV headers: {e}")));
                    return;
                }
            };

            for result in rdr.records() {
                let item = result
                    .map_err(|e| PipelineError::Source(format!("failed to read CSV record: {e}")))
                    .and_then(|record| record_to_scenario(&record, &headers, &defaults));

                if item.is_err() {
                    metrics::counter!("scenario_csv_parse_errors_total").increment(1);
                }

                yield item.map(Envelope::new);
            }
        };

        Box::pin(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn headers() -> StringRecord {
        StringRecord::from(vec!["category", "hours_per_day", "electricity_rate"])
    }

    #[test]
    fn record_with_all_columns_parses() {
        let record = StringRecord::from(vec!["Refrigerator", "6", "7.5"]);
        let s = record_to_scenario(&record, &headers(), &AnalysisDefaults::default()).unwrap();
        assert_eq!(s.category, "Refrigerator");
        assert_eq!(s.hours_per_day, 6.0);
        assert_eq!(s.electricity_rate, 7.5);
    }

    #[test]
    fn empty_numeric_columns_fall_back_to_defaults() {
        let defaults = AnalysisDefaults {
            hours_per_day: 3.0,
            electricity_rate: 11.0,
        };
        let record = StringRecord::from(vec!["Fan", "", " "]);
        let s = record_to_scenario(&record, &headers(), &defaults).unwrap();
        assert_eq!(s.hours_per_day, 3.0);
        assert_eq!(s.electricity_rate, 11.0);
    }

    #[test]
    fn missing_numeric_columns_fall_back_to_defaults() {
        let headers = StringRecord::from(vec!["category"]);
        let record = StringRecord::from(vec!["Television"]);
        let s = record_to_scenario(&record, &headers, &AnalysisDefaults::default()).unwrap();
        assert_eq!(s.hours_per_day, 6.0);
        assert_eq!(s.electricity_rate, 7.0);
    }

    #[test]
    fn invalid_number_is_a_source_error() {
        let record = StringRecord::from(vec!["Fan", "six", "7"]);
        let res = record_to_scenario(&record, &headers(), &AnalysisDefaults::default());
        assert!(matches!(res, Err(PipelineError::Source(msg)) if msg.contains("hours_per_day")));
    }

    #[test]
    fn out_of_range_numbers_are_kept() {
        let record = StringRecord::from(vec!["Fan", "30", "-1"]);
        let s = record_to_scenario(&record, &headers(), &AnalysisDefaults::default()).unwrap();
        assert_eq!(s.hours_per_day, 30.0);
        assert_eq!(s.electricity_rate, -1.0);
    }

    #[test]
    fn blank_category_is_rejected() {
        let record = StringRecord::from(vec!["", "6", "7"]);
        let res = record_to_scenario(&record, &headers(), &AnalysisDefaults::default());
        assert!(matches!(res, Err(PipelineError::Source(_))));
    }

    #[tokio::test]
    async fn stream_yields_rows_and_row_errors_in_order() {
        let path = std::env::temp_dir().join(format!(
            "scenario_csv_source_{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "category,hours_per_day,electricity_rate\nFan,1,3\nLighting,bad,3\nComputer,,\n",
        )
        .unwrap();

        let source = ScenarioCsvFileSource::new(&path, AnalysisDefaults::default());
        let items: Vec<_> = source.stream().await.collect().await;
        std::fs::remove_file(&path).ok();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap().payload.category, "Fan");
        assert!(matches!(items[1], Err(PipelineError::Source(_))));

        let computer = &items[2].as_ref().unwrap().payload;
        assert_eq!(computer.category, "Computer");
        assert_eq!(computer.hours_per_day, 6.0);
        assert_eq!(computer.electricity_rate, 7.0);
    }

    #[tokio::test]
    async fn missing_file_yields_a_single_error() {
        let source = ScenarioCsvFileSource::new("/nonexistent/scenarios.csv", AnalysisDefaults::default());
        let items: Vec<_> = source.stream().await.collect().await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(PipelineError::Source(_))));
    }
}
