use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::transactions::models::Transaction;
use crate::modules::transactions::services::{KeywordClassifier, TransactionClassifier};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub transactions: Vec<Transaction>,
}

/// Classify transactions for tax treatment
/// POST /engine/classify-transactions
///
/// Always served by the deterministic keyword classifier; an AI-backed
/// classifier would be swapped in behind the same trait.
pub async fn classify_transactions(
    request: web::Json<ClassifyRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    if request.transactions.is_empty() {
        return Err(AppError::validation("transactions must not be empty"));
    }

    let classifier = KeywordClassifier::new();
    let classifications = classifier.classify_batch(&request.transactions).await?;

    tracing::debug!(
        classifier = classifier.name(),
        count = classifications.len(),
        "Classified transactions"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": classifications,
    })))
}

/// Configure classification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/engine/classify-transactions",
        web::post().to(classify_transactions),
    );
}
