//! Library crate for netrecon exposing reusable modules.
pub mod gate;
pub mod ports;
pub mod probe;
pub mod report;
pub mod scanner;
pub mod types;
