use serde::{Deserialize, Serialize};

/// An employee record as stored in the `employees` table
///
/// Records carry no identifier; two employees with the same name and team
/// are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub name: String,
    pub team: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}
