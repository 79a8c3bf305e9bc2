pub mod entity;
pub mod paths;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{CompanyRef, Job, JobDetails, JobUpdate, NewJob, StoredJobSlug};
pub use paths::{JobPaths, JobRoute};
pub use repository::{JobRepository, JobTransaction, SlugScope};
pub use value_objects::{
    JobId, JobKind, JobSlug, JobStatus, JobTitle, JobType, is_slug_shaped, type_segment_for_name,
};
