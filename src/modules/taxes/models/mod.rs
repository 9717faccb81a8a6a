pub mod breakdown;
pub mod scenario;

pub use breakdown::{Regime, RegimeComparison, TaxBreakdown};
pub use scenario::{EmploymentType, TaxDeductions, TaxScenario};
