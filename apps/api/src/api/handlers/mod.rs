pub mod employees;
pub mod greeting;
