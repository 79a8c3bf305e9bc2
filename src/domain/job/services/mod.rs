// src/domain/job/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::job::repository::{JobTransaction, SlugScope};
use crate::domain::job::value_objects::{JobSlug, JobTitle};

/// Domain service responsible for producing scope-unique slugs for jobs.
///
/// Uniqueness is only as strong as the transaction it is checked in; callers
/// that need a guarantee must also rely on the store's unique indexes.
pub struct JobSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl JobSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn base_slug(&self, title: &JobTitle) -> DomainResult<JobSlug> {
        self.slug_for(title.as_str())
    }

    fn slug_for(&self, text: &str) -> DomainResult<JobSlug> {
        JobSlug::new(self.generator.slugify(text))
    }

    /// First of `base`, `base-2`, `base-3`, … that is free within `scope`.
    pub async fn unique_slug(
        &self,
        tx: &mut dyn JobTransaction,
        base: &JobSlug,
        scope: &SlugScope,
    ) -> DomainResult<JobSlug> {
        let mut candidate = base.clone();
        let mut counter = 2u64;

        while tx.slug_exists(&candidate, scope).await? {
            tracing::debug!(slug = %candidate, job_type = %scope.job_type, "job slug taken");
            candidate = base.with_suffix(counter);
            counter += 1;
        }

        Ok(candidate)
    }

    /// Like [`Self::unique_slug`], starting from an unvalidated stored title.
    pub async fn unique_slug_for_title(
        &self,
        tx: &mut dyn JobTransaction,
        title: &str,
        scope: &SlugScope,
    ) -> DomainResult<JobSlug> {
        let base = self.slug_for(title)?;
        self.unique_slug(tx, &base, scope).await
    }
}
