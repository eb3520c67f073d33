//! Employee Directory API Library
//!
//! A small HTTP service that lists and creates employee records stored in
//! PostgreSQL. Handlers talk to storage only through the
//! [`EmployeeRepository`](domain::repositories::EmployeeRepository) port.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
