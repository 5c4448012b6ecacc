//! Eligibility routes
//!
//! `POST /api/v1/eligibility/recommend` evaluates one beneficiary record,
//! `POST /api/v1/eligibility/batch` evaluates a list and reports results
//! in the same order. Evaluation never fails; a record that matches no
//! rule gets an empty scheme list.

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::eligibility::BeneficiaryRecord;
use crate::state::AppState;

/// Create the eligibility router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/batch", post(batch))
}

/// Recommendation report for one beneficiary.
#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub name: String,
    pub schemes: Vec<&'static str>,
    pub evaluated_at: DateTime<Utc>,
}

impl RecommendationReport {
    fn new(state: &AppState, record: &BeneficiaryRecord) -> Self {
        Self {
            name: record.name.clone(),
            schemes: state.engine().evaluate(record),
            evaluated_at: Utc::now(),
        }
    }
}

/// POST /recommend
async fn recommend(
    State(state): State<AppState>,
    Json(record): Json<BeneficiaryRecord>,
) -> Json<RecommendationReport> {
    Json(RecommendationReport::new(&state, &record))
}

/// POST /batch
async fn batch(
    State(state): State<AppState>,
    Json(records): Json<Vec<BeneficiaryRecord>>,
) -> Json<Vec<RecommendationReport>> {
    let reports = records
        .iter()
        .map(|record| RecommendationReport::new(&state, record))
        .collect();
    Json(reports)
}
