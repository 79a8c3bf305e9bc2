// tests/support/builders.rs
use std::sync::Arc;

use jobboard_core::application::commands::companies::CompanyCommandService;
use jobboard_core::application::commands::jobs::{JobCommandService, JobInput};
use jobboard_core::application::queries::jobs::JobQueryService;
use jobboard_core::application::services::ApplicationServices;
use jobboard_core::domain::job::services::JobSlugService;
use jobboard_core::domain::job::{JobDetails, JobKind, JobTitle, JobType};
use jobboard_core::infrastructure::util::{CompanyNameSlugGenerator, JobTitleSlugGenerator};

use super::mocks::{DummyClock, InMemoryStore};

pub const APPLY_URL: &str = "https://careers.example.test/apply";

pub fn job_input(title: &str, job_type: JobType) -> JobInput {
    JobInput::new(title, job_type, APPLY_URL)
}

pub fn sponsored_input(title: &str, job_type: JobType) -> JobInput {
    job_input(title, job_type).sponsored(true)
}

/// Listing content for rows seeded straight into the store.
pub fn details(title: &str, job_type: JobType, sponsored: bool) -> JobDetails {
    JobDetails {
        title: JobTitle::new(title).unwrap(),
        job_type,
        kind: JobKind::Scheme,
        sponsored,
        verified: false,
        description: None,
        apply_url: APPLY_URL.to_string(),
        locations: vec!["London".into()],
        sectors: Vec::new(),
        tags: Vec::new(),
        salary_min: None,
        salary_max: None,
        currency: None,
        deadline: None,
    }
}

pub fn slug_service() -> JobSlugService {
    JobSlugService::new(Arc::new(JobTitleSlugGenerator))
}

pub fn services(store: &InMemoryStore, max_slug_attempts: u32) -> ApplicationServices {
    ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(DummyClock),
        Arc::new(JobTitleSlugGenerator),
        Arc::new(CompanyNameSlugGenerator),
        max_slug_attempts,
    )
}

pub fn job_commands(store: &InMemoryStore) -> Arc<JobCommandService> {
    services(store, 5).job_commands
}

pub fn job_queries(store: &InMemoryStore) -> Arc<JobQueryService> {
    services(store, 5).job_queries
}

pub fn company_commands(store: &InMemoryStore) -> Arc<CompanyCommandService> {
    services(store, 5).company_commands
}
