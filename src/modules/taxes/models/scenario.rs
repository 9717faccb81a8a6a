use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::transactions::models::Transaction;

/// Employment classification; decides New-regime rebate eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    Salaried,
    Freelancer,
    Business,
}

/// Self-reported or transaction-derived deduction totals, prior to
/// statutory capping. Capping happens inside the Old-regime calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDeductions {
    #[serde(rename = "section80C", default)]
    pub section_80c: Decimal,
    #[serde(rename = "section80D", default)]
    pub section_80d: Decimal,
    #[serde(rename = "section37", default)]
    pub section_37: Decimal,
    #[serde(default)]
    pub hra: Decimal,
    #[serde(default)]
    pub lta: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

impl TaxDeductions {
    /// True when every bucket is non-negative; callers reject before the
    /// engine runs, the engine itself is total over valid input.
    pub fn is_valid(&self) -> bool {
        [
            self.section_80c,
            self.section_80d,
            self.section_37,
            self.hra,
            self.lta,
            self.other,
        ]
        .iter()
        .all(|amount| *amount >= Decimal::ZERO)
    }
}

/// Full input for shadow-gap analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxScenario {
    pub gross_income: Decimal,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub deductions: TaxDeductions,
}
