use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{EmployeeRepository, RepositoryError};
use crate::domain::Employee;

/// PostgreSQL implementation of EmployeeRepository
///
/// Reads and writes the `employees (name, team)` table with positionally
/// bound parameters. The table is expected to exist already.
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new PostgresEmployeeRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO employees (name, team)
            VALUES ($1, $2)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.team)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to create employee: {}", e)))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT name, team
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to list employees: {}", e)))?;

        Ok(employees)
    }
}
