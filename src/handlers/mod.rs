//! HTTP handlers for the employee resource.

pub mod employee;
pub use employee::*;
