pub mod company;
pub mod errors;
pub mod job;
