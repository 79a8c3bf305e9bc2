// src/domain/company/entity.rs
use crate::domain::company::value_objects::{CompanyId, CompanyName, CompanySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub slug: CompanySlug,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: CompanyName,
    pub slug: CompanySlug,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}
