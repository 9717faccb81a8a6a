use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::transactions::models::Transaction;

/// Deduction buckets the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionBucket {
    Section80C,
    Section80D,
    Nps,
}

/// One classification rule: a transaction feeds `bucket` when its
/// normalized category is in `categories` or its description contains any
/// of `keywords`.
struct DeductionRule {
    bucket: DeductionBucket,
    categories: &'static [&'static str],
    keywords: &'static [&'static str],
}

impl DeductionRule {
    fn matches(&self, category: &str, description: &str) -> bool {
        self.categories.contains(&category)
            || self.keywords.iter().any(|kw| description.contains(kw))
    }
}

/// Rules are evaluated independently per transaction, so a single entry
/// can feed more than one bucket when its text matches several keyword
/// sets. The table keeps that overlap behavior auditable in one place.
const RULES: &[DeductionRule] = &[
    DeductionRule {
        bucket: DeductionBucket::Section80C,
        categories: &["investment"],
        keywords: &[
            "sip",
            "mutual fund",
            "ppf",
            "lic",
            "life insurance",
            "elss",
            "provident",
        ],
    },
    DeductionRule {
        bucket: DeductionBucket::Section80D,
        categories: &["insurance", "medical"],
        keywords: &[
            "health insurance",
            "mediclaim",
            "star health",
            "hdfc ergo",
            "niva bupa",
            "acko",
        ],
    },
    DeductionRule {
        bucket: DeductionBucket::Nps,
        categories: &["nps"],
        keywords: &["nps", "national pension", "tier 1"],
    },
];

/// Statutory caps applied to the raw bucket sums
const CAP_80C: i64 = 150_000;
const CAP_80D: i64 = 50_000;
const CAP_NPS: i64 = 50_000;

/// Raw and capped deduction totals derived from a transaction list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeductionSummary {
    #[serde(rename = "section80C")]
    pub section_80c: Decimal,
    #[serde(rename = "section80D")]
    pub section_80d: Decimal,
    pub nps: Decimal,
    #[serde(rename = "capped80C")]
    pub capped_80c: Decimal,
    #[serde(rename = "capped80D")]
    pub capped_80d: Decimal,
    #[serde(rename = "cappedNPS")]
    pub capped_nps: Decimal,
}

/// Buckets transaction amounts into deduction categories by category
/// label and description keywords, then applies the statutory caps.
pub struct DeductionExtractor;

impl DeductionExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, transactions: &[Transaction]) -> DeductionSummary {
        let mut section_80c = Decimal::ZERO;
        let mut section_80d = Decimal::ZERO;
        let mut nps = Decimal::ZERO;

        for tx in transactions {
            let category = tx.category.trim().to_lowercase();
            let description = tx.description.to_lowercase();
            let value = tx.amount.abs();

            for rule in RULES {
                if !rule.matches(&category, &description) {
                    continue;
                }
                match rule.bucket {
                    DeductionBucket::Section80C => section_80c += value,
                    DeductionBucket::Section80D => section_80d += value,
                    DeductionBucket::Nps => nps += value,
                }
            }
        }

        debug!(
            transactions = transactions.len(),
            %section_80c,
            %section_80d,
            %nps,
            "Extracted deduction totals"
        );

        DeductionSummary {
            section_80c,
            section_80d,
            nps,
            capped_80c: section_80c.min(Decimal::from(CAP_80C)),
            capped_80d: section_80d.min(Decimal::from(CAP_80D)),
            capped_nps: nps.min(Decimal::from(CAP_NPS)),
        }
    }
}

impl Default for DeductionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
