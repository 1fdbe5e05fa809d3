pub mod common;
pub mod employee;

pub use common::common_routes;
pub use employee::employee_routes;
