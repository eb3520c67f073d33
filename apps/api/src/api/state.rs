use std::sync::Arc;

use crate::domain::repositories::EmployeeRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}
