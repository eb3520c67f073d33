use async_trait::async_trait;
use thiserror::Error;

use crate::domain::employee::Employee;

#[cfg(test)]
use mockall::automock;

/// Errors surfaced by employee persistence
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository trait for employee records
///
/// Defines the contract for persisting and retrieving employees.
/// Implementations should handle database-specific details.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new employee
    ///
    /// No deduplication is performed and no identifier is returned.
    async fn create(&self, employee: &Employee) -> Result<(), RepositoryError>;

    /// List every stored employee, in no particular order
    ///
    /// An empty table yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<Employee>, RepositoryError>;
}
