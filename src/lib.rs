//! Shadowtax Tax Estimation Engine Library
//!
//! Pure, stateless computation of Indian income-tax regime comparisons and
//! deduction-gap ("shadow gap") analysis, plus the thin HTTP surface the
//! dashboard talks to.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gaps;
pub use modules::taxes;
pub use modules::transactions;

// The two logical engine operations
pub use modules::gaps::services::find_shadow_gaps;
pub use modules::taxes::services::calculate_regimes;
