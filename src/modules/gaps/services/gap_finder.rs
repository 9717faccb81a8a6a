use rust_decimal::Decimal;

use crate::core::money::format_inr;
use crate::core::{AppError, Result};
use crate::modules::gaps::models::ShadowGap;
use crate::modules::taxes::models::TaxScenario;

/// Section 80C investment ceiling
const MAX_80C: i64 = 150_000;
/// Section 80D self-and-family premium ceiling
const MAX_80D: i64 = 25_000;
/// Transactions above this are worth a reclassification look
const RECLASSIFY_FLOOR: i64 = 10_000;
/// High-value durable-goods markers for the reclassification rule
const DURABLE_KEYWORDS: &[&str] = &["laptop", "phone"];

/// Approximate top-marginal saving per deducted rupee: 30% slab plus 4% cess
fn savings_rate() -> Decimal {
    Decimal::new(312, 3)
}

/// Finds unrealized-savings opportunities between current deduction
/// utilization and the statutory ceilings. Stateless; the gap list is
/// regenerated per request.
pub struct ShadowGapFinder;

impl ShadowGapFinder {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates each rule independently, then orders the result by
    /// `potentialSavings` descending.
    pub fn find_gaps(&self, scenario: &TaxScenario) -> Vec<ShadowGap> {
        let mut gaps = Vec::new();
        let deductions = &scenario.deductions;

        let max_80c = Decimal::from(MAX_80C);
        if deductions.section_80c < max_80c {
            let shortfall = max_80c - deductions.section_80c;
            gaps.push(ShadowGap {
                opportunity_name: "Maximize 80C".to_string(),
                current_spend: deductions.section_80c,
                max_limit: Some(max_80c),
                potential_savings: shortfall * savings_rate(),
                priority: 1,
                action: format!("Invest {} in ELSS/PPF", format_inr(shortfall)),
            });
        }

        let max_80d = Decimal::from(MAX_80D);
        if deductions.section_80d < max_80d {
            let shortfall = max_80d - deductions.section_80d;
            gaps.push(ShadowGap {
                opportunity_name: "Maximize 80D".to_string(),
                current_spend: deductions.section_80d,
                max_limit: Some(max_80d),
                potential_savings: shortfall * savings_rate(),
                priority: 2,
                action: format!("Purchase Health Insurance worth {}", format_inr(shortfall)),
            });
        }

        let floor = Decimal::from(RECLASSIFY_FLOOR);
        for tx in &scenario.transactions {
            let description = tx.description.to_lowercase();
            if tx.category == "Personal"
                && tx.amount > floor
                && DURABLE_KEYWORDS.iter().any(|kw| description.contains(kw))
            {
                gaps.push(ShadowGap {
                    opportunity_name: "Reclassify Business Expense".to_string(),
                    current_spend: tx.amount,
                    max_limit: None,
                    potential_savings: tx.amount * savings_rate(),
                    priority: 1,
                    action: format!("Reclassify '{}' under Section 37", tx.description),
                });
            }
        }

        gaps.sort_by(|a, b| b.potential_savings.cmp(&a.potential_savings));
        gaps
    }
}

impl Default for ShadowGapFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Library entry point; rejects malformed scenarios before the finder runs
pub fn find_shadow_gaps(scenario: &TaxScenario) -> Result<Vec<ShadowGap>> {
    if scenario.gross_income < Decimal::ZERO {
        return Err(AppError::validation("grossIncome must be non-negative"));
    }
    if !scenario.deductions.is_valid() {
        return Err(AppError::validation("deduction amounts must be non-negative"));
    }

    Ok(ShadowGapFinder::new().find_gaps(scenario))
}
