use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two statutory rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    New,
    Old,
}

/// Per-regime tax computation result. Output-only: recomputed fresh on
/// every call, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub taxable_income: Decimal,
    /// Base tax after slab walk and rebate, before cess
    pub tax_amount: Decimal,
    pub cess: Decimal,
    pub surcharge: Decimal,
    pub total_tax: Decimal,
    /// Percentage of gross income; 0 when gross income is 0
    pub effective_rate: Decimal,
    pub regime: Regime,
}

/// Side-by-side regime comparison with the cheaper option recommended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegimeComparison {
    pub new_regime_tax: TaxBreakdown,
    pub old_regime_tax: TaxBreakdown,
    pub recommended: Regime,
    pub savings: Decimal,
}
