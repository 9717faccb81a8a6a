// Unit tests for the shadow-gap finder
//
// Validates:
// - 80C / 80D shortfall gaps with the 0.312 marginal-saving factor
// - The reclassification rule for high-value personal purchases
// - Ranking: the list is always sorted descending by potentialSavings
// - Malformed scenarios are rejected before the finder runs

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shadowtax::gaps::services::{find_shadow_gaps, ShadowGapFinder};
use shadowtax::taxes::models::{EmploymentType, TaxDeductions, TaxScenario};
use shadowtax::transactions::models::{Transaction, TransactionType};

fn scenario(deductions: TaxDeductions, transactions: Vec<Transaction>) -> TaxScenario {
    TaxScenario {
        gross_income: dec!(1_800_000),
        employment_type: EmploymentType::Salaried,
        transactions,
        deductions,
    }
}

fn personal_tx(id: &str, description: &str, amount: Decimal) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        description: description.to_string(),
        amount,
        transaction_type: TransactionType::Debit,
        category: "Personal".to_string(),
        merchant: None,
    }
}

#[test]
fn test_80c_gap_from_partial_utilization() {
    let deductions = TaxDeductions {
        section_80c: dec!(80_000),
        section_80d: dec!(25_000),
        ..TaxDeductions::default()
    };

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, vec![]));
    assert_eq!(gaps.len(), 1);

    let gap = &gaps[0];
    assert_eq!(gap.opportunity_name, "Maximize 80C");
    assert_eq!(gap.current_spend, dec!(80_000));
    assert_eq!(gap.max_limit, Some(dec!(150_000)));
    assert_eq!(gap.potential_savings, dec!(21_840));
    assert_eq!(gap.priority, 1);
    assert_eq!(gap.action, "Invest ₹70,000 in ELSS/PPF");
}

#[test]
fn test_both_limit_gaps_at_zero_utilization() {
    let gaps = ShadowGapFinder::new().find_gaps(&scenario(TaxDeductions::default(), vec![]));
    assert_eq!(gaps.len(), 2);

    // 1.5L * 0.312 outranks 25k * 0.312
    assert_eq!(gaps[0].opportunity_name, "Maximize 80C");
    assert_eq!(gaps[0].potential_savings, dec!(46_800));
    assert_eq!(gaps[1].opportunity_name, "Maximize 80D");
    assert_eq!(gaps[1].potential_savings, dec!(7_800));
    assert_eq!(gaps[1].priority, 2);
    assert_eq!(gaps[1].action, "Purchase Health Insurance worth ₹25,000");
}

#[test]
fn test_no_gap_when_limits_are_met() {
    let deductions = TaxDeductions {
        section_80c: dec!(150_000),
        section_80d: dec!(25_000),
        ..TaxDeductions::default()
    };

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, vec![]));
    assert!(gaps.is_empty());
}

#[test]
fn test_reclassification_gap_for_high_value_durables() {
    let deductions = TaxDeductions {
        section_80c: dec!(150_000),
        section_80d: dec!(25_000),
        ..TaxDeductions::default()
    };
    let transactions = vec![personal_tx("t1", "MacBook Pro laptop", dec!(85_000))];

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, transactions));
    assert_eq!(gaps.len(), 1);

    let gap = &gaps[0];
    assert_eq!(gap.opportunity_name, "Reclassify Business Expense");
    assert_eq!(gap.current_spend, dec!(85_000));
    assert_eq!(gap.max_limit, None);
    assert_eq!(gap.potential_savings, dec!(26_520));
    assert_eq!(gap.priority, 1);
    assert_eq!(gap.action, "Reclassify 'MacBook Pro laptop' under Section 37");
}

#[test]
fn test_reclassification_needs_amount_above_floor() {
    let deductions = TaxDeductions {
        section_80c: dec!(150_000),
        section_80d: dec!(25_000),
        ..TaxDeductions::default()
    };
    // Exactly 10,000 does not qualify; the rule wants strictly more
    let transactions = vec![personal_tx("t1", "Budget phone", dec!(10_000))];

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, transactions));
    assert!(gaps.is_empty());
}

#[test]
fn test_reclassification_only_for_personal_category() {
    let deductions = TaxDeductions {
        section_80c: dec!(150_000),
        section_80d: dec!(25_000),
        ..TaxDeductions::default()
    };
    let mut business_tx = personal_tx("t1", "Office laptop", dec!(95_000));
    business_tx.category = "Business".to_string();

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, vec![business_tx]));
    assert!(gaps.is_empty());
}

#[test]
fn test_reclassification_gap_can_outrank_limit_gaps() {
    let transactions = vec![personal_tx("t1", "iPhone 17 phone", dec!(160_000))];

    let gaps = ShadowGapFinder::new().find_gaps(&scenario(TaxDeductions::default(), transactions));
    assert_eq!(gaps.len(), 3);

    // 160k * 0.312 = 49,920 beats the 80C shortfall's 46,800
    assert_eq!(gaps[0].opportunity_name, "Reclassify Business Expense");
    assert_eq!(gaps[1].opportunity_name, "Maximize 80C");
    assert_eq!(gaps[2].opportunity_name, "Maximize 80D");
}

#[test]
fn test_negative_gross_income_rejected() {
    let mut bad = scenario(TaxDeductions::default(), vec![]);
    bad.gross_income = dec!(-100);

    assert!(find_shadow_gaps(&bad).is_err());
}

#[test]
fn test_negative_deductions_rejected() {
    let deductions = TaxDeductions {
        section_80d: dec!(-1),
        ..TaxDeductions::default()
    };

    assert!(find_shadow_gaps(&scenario(deductions, vec![])).is_err());
}

proptest! {
    #[test]
    fn test_gaps_sorted_descending_by_savings(
        section_80c in 0u64..200_000u64,
        section_80d in 0u64..60_000u64,
        amounts in prop::collection::vec(0u64..300_000u64, 0..5)
    ) {
        let deductions = TaxDeductions {
            section_80c: Decimal::from(section_80c.min(150_000)),
            section_80d: Decimal::from(section_80d.min(25_000)),
            ..TaxDeductions::default()
        };
        let transactions: Vec<Transaction> = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| {
                personal_tx(&format!("t{}", i), "Gaming laptop", Decimal::from(*amount))
            })
            .collect();

        let gaps = ShadowGapFinder::new().find_gaps(&scenario(deductions, transactions));

        for pair in gaps.windows(2) {
            prop_assert!(
                pair[0].potential_savings >= pair[1].potential_savings,
                "gaps must be sorted descending: {} before {}",
                pair[0].potential_savings,
                pair[1].potential_savings
            );
        }
    }
}
