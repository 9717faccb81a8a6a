// Unit tests for the deterministic keyword classifier
//
// Validates:
// - Business / investment / medical keyword routing and precedence
// - The Personal fallback for unmatched descriptions
// - Batch classification preserves order and length

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shadowtax::transactions::models::{Transaction, TransactionType};
use shadowtax::transactions::services::{
    KeywordClassifier, TaxCategory, TaxImpact, TransactionClassifier,
};

fn tx(id: &str, description: &str, amount: Decimal) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
        description: description.to_string(),
        amount,
        transaction_type: TransactionType::Debit,
        category: "Uncategorized".to_string(),
        merchant: None,
    }
}

#[tokio::test]
async fn test_business_expense_keywords() {
    let classifier = KeywordClassifier::new();

    for description in ["Dell laptop", "AWS hosting bill", "Udemy course", "office chair"] {
        let classification = classifier
            .classify(&tx("t1", description, dec!(5_000)))
            .await
            .unwrap();

        assert_eq!(classification.category, TaxCategory::Section37, "{}", description);
        assert_eq!(classification.tax_impact, TaxImpact::Deductible);
    }
}

#[tokio::test]
async fn test_investment_keywords() {
    let classification = KeywordClassifier::new()
        .classify(&tx("t1", "LIC annual premium", dec!(24_000)))
        .await
        .unwrap();

    assert_eq!(classification.category, TaxCategory::Section80C);
    assert_eq!(classification.tax_impact, TaxImpact::Deductible);
}

#[tokio::test]
async fn test_medical_keywords() {
    let classification = KeywordClassifier::new()
        .classify(&tx("t1", "Mediclaim renewal", dec!(18_000)))
        .await
        .unwrap();

    assert_eq!(classification.category, TaxCategory::Section80D);
}

#[tokio::test]
async fn test_unmatched_defaults_to_personal() {
    let classification = KeywordClassifier::new()
        .classify(&tx("t1", "Grocery run", dec!(2_300)))
        .await
        .unwrap();

    assert_eq!(classification.category, TaxCategory::Personal);
    assert_eq!(classification.tax_impact, TaxImpact::None);
    assert!((classification.confidence - 0.6).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_business_keywords_take_precedence() {
    // Matches both the business and investment keyword sets; the business
    // check runs first
    let classification = KeywordClassifier::new()
        .classify(&tx("t1", "laptop bought with LIC payout", dec!(70_000)))
        .await
        .unwrap();

    assert_eq!(classification.category, TaxCategory::Section37);
}

#[tokio::test]
async fn test_batch_preserves_order() {
    let transactions = vec![
        tx("a", "Dell laptop", dec!(60_000)),
        tx("b", "PPF deposit", dec!(50_000)),
        tx("c", "Dinner out", dec!(1_200)),
    ];

    let classifications = KeywordClassifier::new()
        .classify_batch(&transactions)
        .await
        .unwrap();

    assert_eq!(classifications.len(), 3);
    assert_eq!(classifications[0].transaction_id, "a");
    assert_eq!(classifications[0].category, TaxCategory::Section37);
    assert_eq!(classifications[1].transaction_id, "b");
    assert_eq!(classifications[1].category, TaxCategory::Section80C);
    assert_eq!(classifications[2].transaction_id, "c");
    assert_eq!(classifications[2].category, TaxCategory::Personal);
}
