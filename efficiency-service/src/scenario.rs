use serde::Serialize;

use crate::recommendation::{Assessment, RecommendationTier};

/// One what-if question: a category under given usage and tariff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub category: String,
    pub hours_per_day: f64,
    pub electricity_rate: f64,
}

/// Flat, per-line summary written by the batch report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub category: String,
    pub hours_per_day: f64,
    pub electricity_rate: f64,
    pub energy_diff: f64,
    pub co2_diff: f64,
    pub eff_gain: f64,
    pub annual_energy_saved: f64,
    pub annual_co2_saved: f64,
    pub annual_cost_saved: f64,
    pub eco_score: f64,
    pub tier: RecommendationTier,
    pub suggested_component: &'static str,
}

impl ScenarioReport {
    pub fn new(scenario: Scenario, assessment: &Assessment) -> Self {
        let a = &assessment.analysis;
        let r = &assessment.recommendation;

        Self {
            category: scenario.category,
            hours_per_day: scenario.hours_per_day,
            electricity_rate: scenario.electricity_rate,
            energy_diff: a.energy_diff,
            co2_diff: a.co2_diff,
            eff_gain: a.eff_gain,
            annual_energy_saved: a.annual_energy_saved,
            annual_co2_saved: a.annual_co2_saved,
            annual_cost_saved: a.annual_cost_saved,
            eco_score: r.eco_score,
            tier: r.tier,
            suggested_component: r.suggested_component,
        }
    }
}
