pub mod classify_controller;

pub use classify_controller::configure;
