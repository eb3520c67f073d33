// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_employee_repository;

pub use postgres_employee_repository::PostgresEmployeeRepository;
