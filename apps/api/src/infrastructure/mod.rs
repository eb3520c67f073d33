// Infrastructure layer module
// Contains database adapters and connection management

pub mod database;
pub mod repositories;
