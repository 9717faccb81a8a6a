use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::transactions::models::Transaction;

/// Tax treatment category assigned to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxCategory {
    /// Business expense
    #[serde(rename = "Section 37")]
    Section37,
    /// Investments
    #[serde(rename = "80C")]
    Section80C,
    /// Medical / health insurance
    #[serde(rename = "80D")]
    Section80D,
    /// Non-deductible
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxImpact {
    Deductible,
    PartiallyDeductible,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionClassification {
    pub transaction_id: String,
    pub category: TaxCategory,
    /// 0.0 - 1.0
    pub confidence: f32,
    pub reasoning: String,
    pub tax_impact: TaxImpact,
}

/// Capability interface for transaction classification.
///
/// The production deployment may plug a generative-AI classifier in here;
/// the engine itself never depends on one being available and always has
/// the deterministic [`KeywordClassifier`] to fall back on.
#[async_trait]
pub trait TransactionClassifier: Send + Sync {
    async fn classify(&self, transaction: &Transaction) -> Result<TransactionClassification>;

    async fn classify_batch(
        &self,
        transactions: &[Transaction],
    ) -> Result<Vec<TransactionClassification>> {
        let mut classifications = Vec::with_capacity(transactions.len());
        for tx in transactions {
            classifications.push(self.classify(tx).await?);
        }
        Ok(classifications)
    }

    /// Classifier name for logs
    fn name(&self) -> &str;
}

const BUSINESS_KEYWORDS: &[&str] = &[
    "laptop", "monitor", "software", "hosting", "course", "freelance", "office",
];
const INVESTMENT_KEYWORDS: &[&str] = &["lic", "ppf", "elss"];
const MEDICAL_KEYWORDS: &[&str] = &["mediclaim", "health insurance"];

/// Deterministic keyword classifier; the fallback when no AI collaborator
/// is configured or it fails.
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn classify_by_keywords(transaction: &Transaction) -> TransactionClassification {
        let description = transaction.description.to_lowercase();

        let (category, tax_impact, reasoning) = if BUSINESS_KEYWORDS
            .iter()
            .any(|kw| description.contains(kw))
        {
            (
                TaxCategory::Section37,
                TaxImpact::Deductible,
                "Business expense detected via keywords",
            )
        } else if INVESTMENT_KEYWORDS.iter().any(|kw| description.contains(kw)) {
            (
                TaxCategory::Section80C,
                TaxImpact::Deductible,
                "Investment detected via keywords",
            )
        } else if MEDICAL_KEYWORDS.iter().any(|kw| description.contains(kw)) {
            (
                TaxCategory::Section80D,
                TaxImpact::Deductible,
                "Health insurance detected via keywords",
            )
        } else {
            (
                TaxCategory::Personal,
                TaxImpact::None,
                "No deductible pattern matched",
            )
        };

        TransactionClassification {
            transaction_id: transaction.id.clone(),
            category,
            confidence: 0.6,
            reasoning: reasoning.to_string(),
            tax_impact,
        }
    }
}

#[async_trait]
impl TransactionClassifier for KeywordClassifier {
    async fn classify(&self, transaction: &Transaction) -> Result<TransactionClassification> {
        Ok(Self::classify_by_keywords(transaction))
    }

    fn name(&self) -> &str {
        "keyword-fallback"
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}
