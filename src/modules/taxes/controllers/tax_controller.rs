use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::taxes::models::{EmploymentType, TaxDeductions};
use crate::modules::taxes::services::RegimeEngine;
use crate::modules::transactions::models::Transaction;
use crate::modules::transactions::services::DeductionExtractor;

/// Request body for regime comparison. Deductions may be supplied
/// directly, derived from transactions, or both (derived values win for
/// the buckets the extractor owns).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRegimeRequest {
    pub gross_income: Option<Decimal>,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub deductions: Option<TaxDeductions>,
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

/// Compare New vs Old regime for a scenario
/// POST /engine/calculate-regime
pub async fn calculate_regime(
    request: web::Json<CalculateRegimeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let gross_income = request
        .gross_income
        .ok_or_else(|| AppError::validation("grossIncome is required"))?;
    if gross_income < Decimal::ZERO {
        return Err(AppError::validation("grossIncome must be non-negative"));
    }

    let mut deductions = request.deductions.unwrap_or_default();
    let mut derived = None;

    if let Some(transactions) = &request.transactions {
        if !transactions.is_empty() {
            let summary = DeductionExtractor::new().extract(transactions);
            // Extracted buckets replace the self-reported ones; NPS has no
            // field of its own and rides in `other`.
            deductions.section_80c = summary.capped_80c;
            deductions.section_80d = summary.capped_80d;
            deductions.other += summary.capped_nps;
            derived = Some(summary);
        }
    }

    let comparison =
        RegimeEngine::new().calculate_regimes(gross_income, request.employment_type, &deductions)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": {
            "comparison": comparison,
            "deductions": derived,
        }
    })))
}

/// Configure tax engine routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/engine/calculate-regime",
        web::post().to(calculate_regime),
    );
}
