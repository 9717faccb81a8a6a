pub mod gap_controller;

pub use gap_controller::configure;
