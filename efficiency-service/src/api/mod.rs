//! HTTP JSON API over the catalog and the analyzer.

use std::net::SocketAddr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use efficiency_core::{
    catalog,
    domain::{ApplianceRecord, ComponentBreakdown, ComponentRow, CO2_FACTOR_KG_PER_KWH},
    CatalogError,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::AnalysisDefaults;
use crate::recommendation::{self, Assessment};

#[derive(Clone)]
pub struct ApiState {
    pub defaults: AnalysisDefaults,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Omitted or empty `hours_per_day` / `electricity_rate` fall back to the
/// configured defaults, the same as blank cells in a scenario CSV.
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub category: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub hours_per_day: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub electricity_rate: Option<f64>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    pub record: &'static ApplianceRecord,
    pub components: Option<&'static ComponentBreakdown>,
    pub component_rows: Vec<ComponentRow>,
    pub co2_factor_kg_per_kwh: f64,
}

pub fn router(defaults: AnalysisDefaults) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/categories", get(list_categories))
        .route("/categories/:category", get(category_detail))
        .route("/analyze", get(analyze_category))
        .with_state(ApiState { defaults })
}

pub async fn serve(bind_addr: &str, defaults: AnalysisDefaults) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.http_bind_addr '{bind_addr}': {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "efficiency API listening");

    axum::serve(listener, router(defaults).into_make_service()).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(catalog::categories())
}

pub async fn category_detail(Path(category): Path<String>) -> Result<Json<CategoryDetail>, ApiError> {
    let record = catalog::get_record(&category)
        .inspect_err(|_| metrics::counter!("analysis_unknown_category_total").increment(1))?;
    let components = catalog::component_breakdown(record.category);

    Ok(Json(CategoryDetail {
        record,
        components,
        component_rows: components.map(|c| c.aligned_rows()).unwrap_or_default(),
        co2_factor_kg_per_kwh: CO2_FACTOR_KG_PER_KWH,
    }))
}

pub async fn analyze_category(
    State(state): State<ApiState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<Assessment>, ApiError> {
    metrics::counter!("analysis_requests_total").increment(1);

    let hours_per_day = query.hours_per_day.unwrap_or(state.defaults.hours_per_day);
    let electricity_rate = query.electricity_rate.unwrap_or(state.defaults.electricity_rate);

    match recommendation::assess(&query.category, hours_per_day, electricity_rate) {
        Ok(assessment) => Ok(Json(assessment)),
        Err(e) => {
            metrics::counter!("analysis_unknown_category_total").increment(1);
            tracing::warn!(category = %query.category, "analysis requested for unknown category");
            Err(e.into())
        }
    }
}
