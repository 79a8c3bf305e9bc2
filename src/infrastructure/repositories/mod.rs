// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_company;
mod postgres_job;

pub use error::map_sqlx;
pub use postgres_company::PostgresCompanyRepository;
pub use postgres_job::{PostgresJobRepository, PostgresJobTransaction};
