use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::gaps::services::find_shadow_gaps;
use crate::modules::taxes::models::TaxScenario;

/// Rank unrealized-savings opportunities for a scenario
/// POST /engine/shadow-gap-finder
pub async fn shadow_gap_finder(
    scenario: web::Json<TaxScenario>,
) -> Result<HttpResponse, AppError> {
    let gaps = find_shadow_gaps(&scenario.into_inner())?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": gaps,
    })))
}

/// Configure shadow-gap routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/engine/shadow-gap-finder",
        web::post().to(shadow_gap_finder),
    );
}
