use super::map_sqlx;
use crate::domain::company::{
    Company, CompanyId, CompanyName, CompanyRepository, CompanySlug, NewCompany,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    slug: String,
    website: Option<String>,
    logo_url: Option<String>,
    verified: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for Company {
    type Error = DomainError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Ok(Company {
            id: CompanyId::new(row.id)?,
            name: CompanyName::new(row.name)?,
            slug: CompanySlug::new(row.slug)?,
            website: row.website,
            logo_url: row.logo_url,
            verified: row.verified,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, slug, website, logo_url, verified, created_at
             FROM companies WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, slug, website, logo_url, verified, created_at
             FROM companies WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CompanySlug) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, slug, website, logo_url, verified, created_at
             FROM companies WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from).transpose()
    }

    async fn find_by_name_or_slug(
        &self,
        name: &CompanyName,
        slug: &CompanySlug,
    ) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, slug, website, logo_url, verified, created_at
             FROM companies WHERE name = $1 OR slug = $2
             ORDER BY id LIMIT 1",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Company::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &CompanySlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM companies WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let NewCompany {
            name,
            slug,
            website,
            logo_url,
            verified,
            created_at,
        } = company;

        let row = sqlx::query_as::<_, CompanyRow>(
            "INSERT INTO companies (name, slug, website, logo_url, verified, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, slug, website, logo_url, verified, created_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(website)
        .bind(logo_url)
        .bind(verified)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Company::try_from(row)
    }
}
