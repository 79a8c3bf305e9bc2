// tests/support/mocks/util.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use jobboard_core::domain::errors::{DomainError, DomainResult};
use jobboard_core::domain::job::{
    Job, JobId, JobRepository, JobSlug, JobStatus, JobTransaction, SlugScope, StoredJobSlug,
};

#[derive(Clone)]
pub struct DummyClock;

impl jobboard_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Job store whose backend is down: every call fails.
pub struct UnavailableJobRepo;

fn down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl JobRepository for UnavailableJobRepo {
    async fn begin(&self) -> DomainResult<Box<dyn JobTransaction>> {
        down()
    }

    async fn find_by_id(&self, _id: JobId) -> DomainResult<Option<Job>> {
        down()
    }

    async fn find_in_scope(
        &self,
        _slug: &JobSlug,
        _scope: &SlugScope,
    ) -> DomainResult<Option<Job>> {
        down()
    }

    async fn list_stored_slugs(&self) -> DomainResult<Vec<StoredJobSlug>> {
        down()
    }

    async fn set_status(
        &self,
        _id: JobId,
        _status: JobStatus,
        _updated_at: DateTime<Utc>,
    ) -> DomainResult<Job> {
        down()
    }

    async fn delete(&self, _id: JobId) -> DomainResult<()> {
        down()
    }
}
