pub mod classifier;
pub mod deduction_extractor;

pub use classifier::{
    KeywordClassifier, TaxCategory, TaxImpact, TransactionClassification, TransactionClassifier,
};
pub use deduction_extractor::{DeductionExtractor, DeductionSummary};
