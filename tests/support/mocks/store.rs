// tests/support/mocks/store.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use jobboard_core::domain::company::{
    Company, CompanyId, CompanyName, CompanyRepository, CompanySlug, NewCompany,
};
use jobboard_core::domain::errors::{DomainError, DomainResult};
use jobboard_core::domain::job::{
    CompanyRef, Job, JobDetails, JobId, JobRepository, JobSlug, JobStatus, JobTransaction,
    JobUpdate, NewJob, SlugScope, StoredJobSlug,
};

#[derive(Default)]
struct State {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    /// Rows whose persisted slug is not a valid slug, keyed to the raw text.
    legacy_slugs: HashMap<JobId, String>,
    next_job_id: i64,
    next_company_id: i64,
}

/// Jobs and companies held in memory.
///
/// Transactions write straight through (no isolation), which is enough to
/// replay interleavings deterministically. With unique indexes enabled the
/// store rejects scope collisions the way the Postgres partial indexes do.
#[derive(Clone)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    enforce_unique: bool,
    blind_checks: Arc<AtomicUsize>,
    failing_check: Arc<AtomicUsize>,
    checks: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            enforce_unique: true,
            blind_checks: Arc::new(AtomicUsize::new(0)),
            failing_check: Arc::new(AtomicUsize::new(0)),
            checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn without_unique_indexes() -> Self {
        Self {
            enforce_unique: false,
            ..Self::new()
        }
    }

    /// The next `n` slug checks report "free" regardless of stored rows,
    /// as if a concurrent writer committed right after each check.
    pub fn blind_next_slug_checks(&self, n: usize) {
        self.blind_checks.store(n, Ordering::SeqCst);
    }

    /// Slug checks fail with a persistence error from the `n`th one on
    /// (1-based), as if the connection dropped mid-resolution.
    pub fn fail_slug_checks_from(&self, n: usize) {
        self.failing_check.store(n, Ordering::SeqCst);
    }

    pub fn slug_check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn add_company(&self, name: &str, slug: &str) -> Company {
        let mut state = self.state.lock().unwrap();
        state.next_company_id += 1;
        let company = Company {
            id: CompanyId::new(state.next_company_id).unwrap(),
            name: CompanyName::new(name).unwrap(),
            slug: CompanySlug::new(slug).unwrap(),
            website: None,
            logo_url: None,
            verified: true,
            created_at: super::time::fixed_now(),
        };
        state.companies.push(company.clone());
        company
    }

    /// Stores a job as-is, bypassing slug resolution and index checks.
    pub fn seed_job(
        &self,
        company: &Company,
        slug: &str,
        status: JobStatus,
        details: JobDetails,
        created_at: DateTime<Utc>,
    ) -> Job {
        let mut state = self.state.lock().unwrap();
        state.next_job_id += 1;
        let job = Job {
            id: JobId::new(state.next_job_id).unwrap(),
            slug: JobSlug::new(slug).unwrap(),
            status,
            company: CompanyRef {
                id: company.id,
                slug: company.slug.clone(),
            },
            details,
            posted_at: created_at,
            created_at,
            updated_at: created_at,
        };
        state.jobs.push(job.clone());
        job
    }

    /// Stores a job whose persisted slug is malformed, as left behind by
    /// imports that predate slug validation.
    pub fn seed_legacy_job(
        &self,
        company: &Company,
        raw_slug: &str,
        details: JobDetails,
        created_at: DateTime<Utc>,
    ) -> Job {
        let job = self.seed_job(company, "legacy", JobStatus::Published, details, created_at);
        self.state
            .lock()
            .unwrap()
            .legacy_slugs
            .insert(job.id, raw_slug.to_string());
        job
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.state.lock().unwrap().jobs.clone()
    }

    pub fn job(&self, id: JobId) -> Option<Job> {
        self.state
            .lock()
            .unwrap()
            .jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }

    pub fn companies(&self) -> Vec<Company> {
        self.state.lock().unwrap().companies.clone()
    }

    fn company_ref(state: &State, id: CompanyId) -> DomainResult<CompanyRef> {
        state
            .companies
            .iter()
            .find(|company| company.id == id)
            .map(|company| CompanyRef {
                id: company.id,
                slug: company.slug.clone(),
            })
            .ok_or_else(|| DomainError::NotFound("company not found".into()))
    }

    fn check_unique(&self, state: &State, candidate: &Job) -> DomainResult<()> {
        if !self.enforce_unique {
            return Ok(());
        }
        let scope = SlugScope::of(candidate).excluding(candidate.id);
        if live_rows(state).any(|job| scope.matches(job, &candidate.slug)) {
            return Err(DomainError::Conflict("job slug already exists in scope".into()));
        }
        Ok(())
    }
}

/// Rows with a well-formed slug; legacy rows never match a valid candidate.
fn live_rows(state: &State) -> impl Iterator<Item = &Job> {
    state
        .jobs
        .iter()
        .filter(move |job| !state.legacy_slugs.contains_key(&job.id))
}

pub struct InMemoryTransaction {
    store: InMemoryStore,
}

#[async_trait]
impl JobTransaction for InMemoryTransaction {
    async fn slug_exists(&mut self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<bool> {
        let check = self.store.checks.fetch_add(1, Ordering::SeqCst) + 1;
        let failing = self.store.failing_check.load(Ordering::SeqCst);
        if failing != 0 && check >= failing {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        let blind = self
            .store
            .blind_checks
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if blind {
            return Ok(false);
        }
        let state = self.store.state.lock().unwrap();
        Ok(live_rows(&state).any(|job| scope.matches(job, slug)))
    }

    async fn insert(&mut self, job: NewJob) -> DomainResult<Job> {
        let mut state = self.store.state.lock().unwrap();
        let company = InMemoryStore::company_ref(&state, job.company_id)?;
        let created = Job {
            id: JobId::new(state.next_job_id + 1)?,
            slug: job.slug,
            status: job.status,
            company,
            details: job.details,
            posted_at: job.posted_at,
            created_at: job.created_at,
            updated_at: job.created_at,
        };
        self.store.check_unique(&state, &created)?;
        state.next_job_id += 1;
        state.jobs.push(created.clone());
        Ok(created)
    }

    async fn update(&mut self, update: JobUpdate) -> DomainResult<Job> {
        let mut state = self.store.state.lock().unwrap();
        let company = InMemoryStore::company_ref(&state, update.company_id)?;
        let index = state
            .jobs
            .iter()
            .position(|job| job.id == update.id)
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        let mut updated = state.jobs[index].clone();
        updated.slug = update.slug;
        updated.status = update.status;
        updated.company = company;
        updated.details = update.details;
        if let Some(posted_at) = update.posted_at {
            updated.posted_at = posted_at;
        }
        updated.updated_at = update.updated_at;

        self.store.check_unique(&state, &updated)?;
        state.jobs[index] = updated.clone();
        Ok(updated)
    }

    async fn set_slug(
        &mut self,
        id: JobId,
        slug: &JobSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut state = self.store.state.lock().unwrap();
        let index = state
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        let mut updated = state.jobs[index].clone();
        updated.slug = slug.clone();
        updated.updated_at = updated_at;

        self.store.check_unique(&state, &updated)?;
        state.jobs[index] = updated;
        state.legacy_slugs.remove(&id);
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        Ok(())
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn begin(&self) -> DomainResult<Box<dyn JobTransaction>> {
        Ok(Box::new(InMemoryTransaction {
            store: self.clone(),
        }))
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        Ok(self.job(id))
    }

    async fn find_in_scope(&self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<Option<Job>> {
        let state = self.state.lock().unwrap();
        Ok(live_rows(&state).find(|job| scope.matches(job, slug)).cloned())
    }

    async fn list_stored_slugs(&self) -> DomainResult<Vec<StoredJobSlug>> {
        let state = self.state.lock().unwrap();
        let mut stored: Vec<StoredJobSlug> = state
            .jobs
            .iter()
            .map(|job| StoredJobSlug {
                id: job.id,
                title: job.details.title.to_string(),
                slug: state
                    .legacy_slugs
                    .get(&job.id)
                    .cloned()
                    .unwrap_or_else(|| job.slug.to_string()),
                job_type: job.details.job_type,
                sponsored: job.details.sponsored,
                company_id: job.company.id,
                created_at: job.created_at,
            })
            .collect();
        stored.sort_by_key(|job| (job.created_at, job.id));
        Ok(stored)
    }

    async fn set_status(
        &self,
        id: JobId,
        status: JobStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Job> {
        let mut state = self.state.lock().unwrap();
        let job = state
            .jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;
        job.status = status;
        job.updated_at = updated_at;
        Ok(job.clone())
    }

    async fn delete(&self, id: JobId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.jobs.len();
        state.jobs.retain(|job| job.id != id);
        if state.jobs.len() == before {
            return Err(DomainError::NotFound("job not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| c.name == *name).cloned())
    }

    async fn slug_exists(&self, slug: &CompanySlug) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().any(|c| c.slug == *slug))
    }

    async fn find_by_slug(&self, slug: &CompanySlug) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| c.slug == *slug).cloned())
    }

    async fn find_by_name_or_slug(
        &self,
        name: &CompanyName,
        slug: &CompanySlug,
    ) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .companies
            .iter()
            .find(|c| c.name == *name || c.slug == *slug)
            .cloned())
    }

    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let mut state = self.state.lock().unwrap();
        if state
            .companies
            .iter()
            .any(|c| c.name == company.name || c.slug == company.slug)
        {
            return Err(DomainError::Conflict("company already exists".into()));
        }
        state.next_company_id += 1;
        let created = Company {
            id: CompanyId::new(state.next_company_id)?,
            name: company.name,
            slug: company.slug,
            website: company.website,
            logo_url: company.logo_url,
            verified: company.verified,
            created_at: company.created_at,
        };
        state.companies.push(created.clone());
        Ok(created)
    }
}
