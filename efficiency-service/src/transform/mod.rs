use efficiency_core::CatalogError;

use crate::pipeline::{Envelope, PipelineError, Transform};
use crate::recommendation;
use crate::scenario::{Scenario, ScenarioReport};

/// Run the analyzer and recommendation policy for one scenario.
pub fn analyze_scenario(scenario: Scenario) -> Result<ScenarioReport, CatalogError> {
    let assessment = recommendation::assess(
        &scenario.category,
        scenario.hours_per_day,
        scenario.electricity_rate,
    )?;
    Ok(ScenarioReport::new(scenario, &assessment))
}

#[derive(Clone, Default)]
pub struct AnalyzeScenario;

#[async_trait::async_trait]
impl Transform<Scenario, ScenarioReport> for AnalyzeScenario {
    async fn apply(
        &self,
        input: Envelope<Scenario>,
    ) -> Result<Envelope<ScenarioReport>, PipelineError> {
        let scenario = input.payload.clone();
        match analyze_scenario(scenario) {
            Ok(report) => Ok(input.map(report)),
            Err(e) => {
                metrics::counter!("scenario_unknown_category_total").increment(1);
                Err(PipelineError::Transform(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationTier;

    fn scenario(category: &str, hours_per_day: f64, electricity_rate: f64) -> Scenario {
        Scenario {
            category: category.to_string(),
            hours_per_day,
            electricity_rate,
        }
    }

    #[test]
    fn report_carries_inputs_and_savings() {
        let report = analyze_scenario(scenario("Fan", 1.0, 3.0)).unwrap();
        assert_eq!(report.category, "Fan");
        assert_eq!(report.hours_per_day, 1.0);
        assert_eq!(report.electricity_rate, 3.0);
        assert_eq!(report.energy_diff, 50.0);
        assert!((report.annual_energy_saved - 18.25).abs() < 1e-9);
        assert!((report.annual_cost_saved - 54.75).abs() < 1e-9);
        assert_eq!(report.tier, RecommendationTier::Balanced);
        assert_eq!(report.suggested_component, "BLDC Fan");
    }

    #[tokio::test]
    async fn transform_keeps_received_at() {
        let env = Envelope::new(scenario("Refrigerator", 6.0, 7.0));
        let received_at = env.received_at;

        let out = AnalyzeScenario.apply(env).await.unwrap();
        assert_eq!(out.received_at, received_at);
        assert_eq!(out.payload.tier, RecommendationTier::Upgrade);
    }

    #[tokio::test]
    async fn transform_rejects_unknown_category() {
        let env = Envelope::new(scenario("Nonexistent", 6.0, 7.0));
        let res = AnalyzeScenario.apply(env).await;
        assert!(matches!(res, Err(PipelineError::Transform(msg)) if msg.contains("Nonexistent")));
    }
}
