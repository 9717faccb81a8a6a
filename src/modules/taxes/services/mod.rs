pub mod regime_engine;
pub mod slab;

pub use regime_engine::{calculate_regimes, compare_regimes, RegimeEngine};
pub use slab::{Slab, SlabSchedule};
