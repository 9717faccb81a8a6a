pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Transaction, TransactionType};
pub use services::{DeductionExtractor, DeductionSummary, KeywordClassifier, TransactionClassifier};
