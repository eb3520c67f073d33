// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod employee;
pub mod repositories;

pub use employee::Employee;
