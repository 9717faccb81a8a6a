pub mod shadow_gap;

pub use shadow_gap::ShadowGap;
