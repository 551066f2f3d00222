use efficiency_core::{analyze, domain::Generation, AnalysisResult, CatalogError};
use serde::Serialize;

/// Eco scores strictly above this favour the Updated generation.
pub const UPGRADE_THRESHOLD: f64 = 120.0;
/// Eco scores strictly above this (and not above `UPGRADE_THRESHOLD`) favour Modern.
pub const BALANCED_THRESHOLD: f64 = 80.0;

/// Weighted composite of efficiency gain, annual CO₂ saved and annual cost saved.
pub fn eco_score(analysis: &AnalysisResult) -> f64 {
    analysis.eff_gain * 3.0 + analysis.annual_co2_saved / 10.0 + analysis.annual_cost_saved / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Upgrade,
    Balanced,
    Retain,
}

impl RecommendationTier {
    /// A NaN score never clears either threshold and lands in `Retain`.
    pub fn from_score(score: f64) -> Self {
        if score > UPGRADE_THRESHOLD {
            Self::Upgrade
        } else if score > BALANCED_THRESHOLD {
            Self::Balanced
        } else {
            Self::Retain
        }
    }

    pub fn generation(self) -> Generation {
        match self {
            Self::Upgrade => Generation::Updated,
            Self::Balanced => Generation::Modern,
            Self::Retain => Generation::Old,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub eco_score: f64,
    pub suggested_generation: &'static str,
    pub suggested_component: &'static str,
}

pub fn recommend(analysis: &AnalysisResult) -> Recommendation {
    let eco_score = eco_score(analysis);
    let tier = RecommendationTier::from_score(eco_score);

    Recommendation {
        tier,
        eco_score,
        suggested_generation: tier.generation().label(),
        suggested_component: analysis.record.component_name(tier.generation()),
    }
}

/// An analysis together with the recommendation derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub analysis: AnalysisResult,
    pub recommendation: Recommendation,
}

pub fn assess(
    category: &str,
    hours_per_day: f64,
    electricity_rate: f64,
) -> Result<Assessment, CatalogError> {
    let analysis = analyze(category, hours_per_day, electricity_rate)?;
    let recommendation = recommend(&analysis);

    tracing::debug!(
        category,
        hours_per_day,
        electricity_rate,
        eco_score = recommendation.eco_score,
        tier = ?recommendation.tier,
        "assessment computed"
    );

    Ok(Assessment {
        analysis,
        recommendation,
    })
}
