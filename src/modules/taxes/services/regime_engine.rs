use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{
    EmploymentType, Regime, RegimeComparison, TaxBreakdown, TaxDeductions,
};
use crate::modules::taxes::services::slab::SlabSchedule;

/// Section 80C cap claimed against the Old regime
const SECTION_80C_CAP: i64 = 150_000;
/// Section 80D self-and-family premium cap claimed against the Old regime
const SECTION_80D_CAP: i64 = 25_000;
/// New-regime rebate ceiling for salaried income (u/s 87A, FY 2026-27)
const NEW_REGIME_REBATE_CEILING: i64 = 1_275_000;
/// Old-regime rebate ceiling on taxable income (u/s 87A)
const OLD_REGIME_REBATE_CEILING: i64 = 500_000;
/// Health & education cess on base tax plus surcharge
fn cess_rate() -> Decimal {
    Decimal::new(4, 2)
}

/// Computes per-regime tax breakdowns and their comparison.
///
/// Pure and stateless: every call recomputes from inputs, so invocations
/// are independent and safe to run concurrently.
pub struct RegimeEngine;

impl RegimeEngine {
    pub fn new() -> Self {
        Self
    }

    /// New Regime (FY 2026-27): gross income is taxed unchanged, no
    /// deduction subtraction. Salaried income up to 12.75L is rebated to
    /// zero after the slab walk, before cess.
    pub fn calculate_new_regime(
        &self,
        gross_income: Decimal,
        employment_type: EmploymentType,
    ) -> TaxBreakdown {
        let taxable_income = gross_income;
        let mut tax = SlabSchedule::new_regime().tax_for(taxable_income);

        if employment_type == EmploymentType::Salaried
            && taxable_income <= Decimal::from(NEW_REGIME_REBATE_CEILING)
        {
            tax = Decimal::ZERO;
        }

        Self::breakdown(Regime::New, gross_income, taxable_income, tax)
    }

    /// Old Regime: capped deductions come off gross income first
    /// (80C <= 1.5L, 80D <= 25k, section 37/HRA/LTA/other uncapped), then
    /// the four-band slab walk. Taxable income up to 5L is rebated to zero.
    pub fn calculate_old_regime(
        &self,
        gross_income: Decimal,
        deductions: &TaxDeductions,
    ) -> TaxBreakdown {
        let total_deductions = deductions.section_80c.min(Decimal::from(SECTION_80C_CAP))
            + deductions.section_80d.min(Decimal::from(SECTION_80D_CAP))
            + deductions.section_37
            + deductions.hra
            + deductions.lta
            + deductions.other;

        let taxable_income = (gross_income - total_deductions).max(Decimal::ZERO);
        let mut tax = SlabSchedule::old_regime().tax_for(taxable_income);

        if taxable_income <= Decimal::from(OLD_REGIME_REBATE_CEILING) {
            tax = Decimal::ZERO;
        }

        Self::breakdown(Regime::Old, gross_income, taxable_income, tax)
    }

    /// Runs both regimes and picks the cheaper one. This is the validated
    /// entry point; the per-regime functions are total over non-negative
    /// input.
    pub fn calculate_regimes(
        &self,
        gross_income: Decimal,
        employment_type: EmploymentType,
        deductions: &TaxDeductions,
    ) -> Result<RegimeComparison> {
        if gross_income < Decimal::ZERO {
            return Err(AppError::validation("grossIncome must be non-negative"));
        }
        if !deductions.is_valid() {
            return Err(AppError::validation("deduction amounts must be non-negative"));
        }

        let new_tax = self.calculate_new_regime(gross_income, employment_type);
        let old_tax = self.calculate_old_regime(gross_income, deductions);

        debug!(
            gross_income = %gross_income,
            new_total = %new_tax.total_tax,
            old_total = %old_tax.total_tax,
            "Computed regime comparison"
        );

        Ok(compare_regimes(new_tax, old_tax))
    }

    fn breakdown(
        regime: Regime,
        gross_income: Decimal,
        taxable_income: Decimal,
        tax: Decimal,
    ) -> TaxBreakdown {
        // Slab-wise surcharge above 50L is not implemented yet; the field
        // is kept so totals stay additive when it lands.
        let surcharge = Decimal::ZERO;
        let cess = (tax + surcharge) * cess_rate();
        let total_tax = tax + surcharge + cess;
        let effective_rate = if gross_income > Decimal::ZERO {
            total_tax / gross_income * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        TaxBreakdown {
            taxable_income,
            tax_amount: tax,
            cess,
            surcharge,
            total_tax,
            effective_rate,
            regime,
        }
    }
}

impl Default for RegimeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the cheaper breakdown; ties favor the simpler New regime.
pub fn compare_regimes(new_tax: TaxBreakdown, old_tax: TaxBreakdown) -> RegimeComparison {
    let savings = (new_tax.total_tax - old_tax.total_tax).abs();
    let recommended = if new_tax.total_tax <= old_tax.total_tax {
        Regime::New
    } else {
        Regime::Old
    };

    RegimeComparison {
        new_regime_tax: new_tax,
        old_regime_tax: old_tax,
        recommended,
        savings,
    }
}

/// Library entry point for one-shot regime comparison
pub fn calculate_regimes(
    gross_income: Decimal,
    employment_type: EmploymentType,
    deductions: &TaxDeductions,
) -> Result<RegimeComparison> {
    RegimeEngine::new().calculate_regimes(gross_income, employment_type, deductions)
}
