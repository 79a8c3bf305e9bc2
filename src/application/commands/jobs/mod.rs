// src/application/commands/jobs/mod.rs
mod backfill;
mod create;
mod delete;
mod input;
mod service;
mod status;
mod update;

pub use create::CreateJobCommand;
pub use delete::DeleteJobCommand;
pub use input::JobInput;
pub use service::{DEFAULT_MAX_SLUG_ATTEMPTS, JobCommandService};
pub use status::SetJobStatusCommand;
pub use update::UpdateJobCommand;
