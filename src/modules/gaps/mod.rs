pub mod controllers;
pub mod models;
pub mod services;

pub use models::ShadowGap;
pub use services::ShadowGapFinder;
