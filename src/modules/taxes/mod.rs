pub mod controllers;
pub mod models;
pub mod services;

pub use models::{EmploymentType, Regime, RegimeComparison, TaxBreakdown, TaxDeductions, TaxScenario};
pub use services::{RegimeEngine, SlabSchedule};
