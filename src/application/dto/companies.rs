use crate::domain::company::Company;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id.into(),
            name: company.name.into(),
            slug: company.slug.into(),
            website: company.website,
            logo_url: company.logo_url,
            verified: company.verified,
            created_at: company.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "company", rename_all = "lowercase")]
pub enum CompanyRegistration {
    Created(CompanyDto),
    /// A company with the same name or slug was already registered.
    Existing(CompanyDto),
}

impl CompanyRegistration {
    pub fn company(&self) -> &CompanyDto {
        match self {
            CompanyRegistration::Created(company) | CompanyRegistration::Existing(company) => {
                company
            }
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CompanyRegistration::Created(_))
    }
}
