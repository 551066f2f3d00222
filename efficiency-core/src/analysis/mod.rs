use crate::catalog::{self, CatalogError};
use crate::domain::{ApplianceRecord, ComponentBreakdown, Generation};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Savings of the Updated generation over the Old one for a single category.
///
/// Instantaneous deltas are Old minus Updated (efficiency is Updated minus Old),
/// annual figures project those deltas over `hours_per_day * 365` hours. No
/// rounding is applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisResult {
    pub category: &'static str,
    pub old: &'static str,
    pub modern: &'static str,
    pub updated: &'static str,
    /// Power reduction in W.
    pub energy_diff: f64,
    /// Emission reduction in kg CO₂ per hour.
    pub co2_diff: f64,
    /// Efficiency gain in percentage points.
    pub eff_gain: f64,
    /// kWh per year.
    pub annual_energy_saved: f64,
    /// kg CO₂ per year.
    pub annual_co2_saved: f64,
    /// Currency per year, in whatever unit `electricity_rate` was given in.
    pub annual_cost_saved: f64,
    pub record: &'static ApplianceRecord,
    pub components: Option<&'static ComponentBreakdown>,
}

/// Compute the savings summary for `category`.
///
/// `hours_per_day` and `electricity_rate` are used as given: zero, negative
/// or out-of-range values simply scale the annual figures.
pub fn analyze(
    category: &str,
    hours_per_day: f64,
    electricity_rate: f64,
) -> Result<AnalysisResult, CatalogError> {
    let record = catalog::get_record(category)?;

    let energy_diff = record.power_watts(Generation::Old) - record.power_watts(Generation::Updated);
    let co2_diff = record.co2_per_hour(Generation::Old) - record.co2_per_hour(Generation::Updated);
    let eff_gain =
        record.efficiency_percent(Generation::Updated) - record.efficiency_percent(Generation::Old);

    let annual_hours = hours_per_day * DAYS_PER_YEAR;
    let annual_energy_saved = (energy_diff / 1000.0) * annual_hours;
    let annual_co2_saved = co2_diff * annual_hours;
    let annual_cost_saved = annual_energy_saved * electricity_rate;

    Ok(AnalysisResult {
        category: record.category,
        old: record.component_name(Generation::Old),
        modern: record.component_name(Generation::Modern),
        updated: record.component_name(Generation::Updated),
        energy_diff,
        co2_diff,
        eff_gain,
        annual_energy_saved,
        annual_co2_saved,
        annual_cost_saved,
        record,
        components: catalog::component_breakdown(record.category),
    })
}
