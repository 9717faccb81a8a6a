pub mod tax_controller;

pub use tax_controller::configure;
