// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod employee_repository;

pub use employee_repository::{EmployeeRepository, RepositoryError};

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
