pub mod actor;
pub mod companies;
pub mod jobs;

pub use actor::JobActor;
pub use companies::{CompanyDto, CompanyRegistration};
pub use jobs::{BackfillReportDto, JobDto, JobMutationDto, JobPageDto, SlugChangeDto};
