use super::JobQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::job::JobId,
};

pub struct CanonicalPathQuery {
    pub id: i64,
}

impl JobQueryService {
    /// Canonical path of any job, published or not.
    pub async fn canonical_path_for(&self, query: CanonicalPathQuery) -> ApplicationResult<String> {
        let id = JobId::new(query.id)?;
        let job = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("job not found"))?;
        Ok(job.canonical_path())
    }
}
