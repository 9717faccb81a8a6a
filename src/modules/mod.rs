pub mod gaps;
pub mod taxes;
pub mod transactions;
