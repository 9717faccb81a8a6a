pub mod gap_finder;

pub use gap_finder::{find_shadow_gaps, ShadowGapFinder};
