// src/infrastructure/repositories/postgres_job.rs
use super::map_sqlx;
use crate::domain::company::{CompanyId, CompanySlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::{
    CompanyRef, Job, JobDetails, JobId, JobRepository, JobSlug, JobStatus, JobTitle,
    JobTransaction, JobUpdate, NewJob, SlugScope, StoredJobSlug,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const JOB_COLUMNS: &str = "j.id, j.title, j.slug, j.job_type, j.kind, j.status, j.company_id, \
     c.slug AS company_slug, j.description, j.apply_url, j.locations, j.sectors, j.tags, \
     j.salary_min, j.salary_max, j.currency, j.deadline, j.sponsored, j.verified, \
     j.posted_at, j.created_at, j.updated_at";

fn select_jobs() -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new(format!(
        "SELECT {JOB_COLUMNS} FROM jobs j JOIN companies c ON c.id = j.company_id"
    ))
}

/// Wraps a data-modifying statement (aliased `j`) so the company slug can be
/// joined onto the returned row.
fn returning_job(builder: &mut QueryBuilder<'_, Postgres>) {
    builder.push(format!(
        " RETURNING *) SELECT {JOB_COLUMNS} FROM j JOIN companies c ON c.id = j.company_id"
    ));
}

fn push_scope_filter(builder: &mut QueryBuilder<'_, Postgres>, slug: &JobSlug, scope: &SlugScope) {
    builder.push(" WHERE j.slug = ");
    builder.push_bind(slug.to_string());
    builder.push(" AND j.job_type = ");
    builder.push_bind(scope.job_type.as_str());
    builder.push(" AND j.sponsored = ");
    builder.push_bind(scope.sponsored);
    if scope.sponsored {
        if let Some(company_id) = scope.company_id {
            builder.push(" AND j.company_id = ");
            builder.push_bind(i64::from(company_id));
        }
    }
    if let Some(exclude_id) = scope.exclude_id {
        builder.push(" AND j.id <> ");
        builder.push_bind(i64::from(exclude_id));
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    title: String,
    slug: String,
    job_type: String,
    kind: String,
    status: String,
    company_id: i64,
    company_slug: String,
    description: Option<String>,
    apply_url: String,
    locations: Vec<String>,
    sectors: Vec<String>,
    tags: Vec<String>,
    salary_min: Option<i32>,
    salary_max: Option<i32>,
    currency: Option<String>,
    deadline: Option<DateTime<Utc>>,
    sponsored: bool,
    verified: bool,
    posted_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = DomainError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Job {
            id: JobId::new(row.id)?,
            slug: JobSlug::new(row.slug)?,
            status: row.status.parse()?,
            company: CompanyRef {
                id: CompanyId::new(row.company_id)?,
                slug: CompanySlug::new(row.company_slug)?,
            },
            details: JobDetails {
                title: JobTitle::new(row.title)?,
                job_type: row.job_type.parse()?,
                kind: row.kind.parse()?,
                sponsored: row.sponsored,
                verified: row.verified,
                description: row.description,
                apply_url: row.apply_url,
                locations: row.locations,
                sectors: row.sectors,
                tags: row.tags,
                salary_min: row.salary_min,
                salary_max: row.salary_max,
                currency: row.currency,
                deadline: row.deadline,
            },
            posted_at: row.posted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Slug columns only; `title` and `slug` stay raw text.
#[derive(Debug, FromRow)]
struct StoredSlugRow {
    id: i64,
    title: String,
    slug: String,
    job_type: String,
    sponsored: bool,
    company_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<StoredSlugRow> for StoredJobSlug {
    type Error = DomainError;

    fn try_from(row: StoredSlugRow) -> Result<Self, Self::Error> {
        Ok(StoredJobSlug {
            id: JobId::new(row.id)?,
            title: row.title,
            slug: row.slug,
            job_type: row.job_type.parse()?,
            sponsored: row.sponsored,
            company_id: CompanyId::new(row.company_id)?,
            created_at: row.created_at,
        })
    }
}

fn push_details(builder: &mut QueryBuilder<'_, Postgres>, details: JobDetails) {
    let mut values = builder.separated(", ");
    values.push_bind(String::from(details.title));
    values.push_bind(details.job_type.as_str());
    values.push_bind(details.kind.as_str());
    values.push_bind(details.sponsored);
    values.push_bind(details.verified);
    values.push_bind(details.description);
    values.push_bind(details.apply_url);
    values.push_bind(details.locations);
    values.push_bind(details.sectors);
    values.push_bind(details.tags);
    values.push_bind(details.salary_min);
    values.push_bind(details.salary_max);
    values.push_bind(details.currency);
    values.push_bind(details.deadline);
}

const DETAIL_COLUMNS: &str = "title, job_type, kind, sponsored, verified, description, apply_url, \
     locations, sectors, tags, salary_min, salary_max, currency, deadline";

#[derive(Clone)]
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Open transaction on the jobs table; rolled back by sqlx when dropped.
pub struct PostgresJobTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl JobTransaction for PostgresJobTransaction {
    async fn slug_exists(&mut self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT EXISTS (SELECT 1 FROM jobs j");
        push_scope_filter(&mut builder, slug, scope);
        builder.push(")");

        builder
            .build_query_scalar::<bool>()
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&mut self, job: NewJob) -> DomainResult<Job> {
        let NewJob {
            slug,
            status,
            company_id,
            details,
            posted_at,
            created_at,
        } = job;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "WITH j AS (INSERT INTO jobs (slug, status, company_id, posted_at, created_at, updated_at, {DETAIL_COLUMNS}) VALUES ("
        ));
        builder.push_bind(String::from(slug));
        builder.push(", ");
        builder.push_bind(status.as_str());
        builder.push(", ");
        builder.push_bind(i64::from(company_id));
        builder.push(", ");
        builder.push_bind(posted_at);
        builder.push(", ");
        builder.push_bind(created_at);
        builder.push(", ");
        builder.push_bind(created_at);
        builder.push(", ");
        push_details(&mut builder, details);
        builder.push(")");
        returning_job(&mut builder);

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        Job::try_from(row)
    }

    async fn update(&mut self, update: JobUpdate) -> DomainResult<Job> {
        let JobUpdate {
            id,
            slug,
            status,
            company_id,
            details,
            posted_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH j AS (UPDATE jobs SET updated_at = ");
        builder.push_bind(updated_at);
        builder.push(", slug = ");
        builder.push_bind(String::from(slug));
        builder.push(", status = ");
        builder.push_bind(status.as_str());
        builder.push(", company_id = ");
        builder.push_bind(i64::from(company_id));
        if let Some(posted_at) = posted_at {
            builder.push(", posted_at = ");
            builder.push_bind(posted_at);
        }
        builder.push(format!(", ({DETAIL_COLUMNS}) = ROW("));
        push_details(&mut builder, details);
        builder.push(") WHERE id = ");
        builder.push_bind(i64::from(id));
        returning_job(&mut builder);

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        Job::try_from(row)
    }

    async fn set_slug(
        &mut self,
        id: JobId,
        slug: &JobSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result = sqlx::query("UPDATE jobs SET slug = $1, updated_at = $2 WHERE id = $3")
            .bind(slug.as_str())
            .bind(updated_at)
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("job not found".into()));
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn begin(&self) -> DomainResult<Box<dyn JobTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresJobTransaction { tx }))
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        let mut builder = select_jobs();
        builder.push(" WHERE j.id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Job::try_from).transpose()
    }

    async fn find_in_scope(&self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<Option<Job>> {
        let mut builder = select_jobs();
        push_scope_filter(&mut builder, slug, scope);
        builder.push(" ORDER BY j.created_at, j.id LIMIT 1");

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Job::try_from).transpose()
    }

    async fn list_stored_slugs(&self) -> DomainResult<Vec<StoredJobSlug>> {
        let rows = sqlx::query_as::<_, StoredSlugRow>(
            "SELECT id, title, slug, job_type, sponsored, company_id, created_at
             FROM jobs ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StoredJobSlug::try_from).collect()
    }

    async fn set_status(
        &self,
        id: JobId,
        status: JobStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Job> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH j AS (UPDATE jobs SET status = ");
        builder.push_bind(status.as_str());
        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        returning_job(&mut builder);

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        Job::try_from(row)
    }

    async fn delete(&self, id: JobId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("job not found".into()));
        }
        Ok(())
    }
}
