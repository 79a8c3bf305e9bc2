use super::CompanyCommandService;
use crate::{
    application::{
        dto::{CompanyDto, CompanyRegistration},
        error::{ApplicationError, ApplicationResult},
    },
    domain::company::{CompanyName, CompanySlug, NewCompany},
};

pub struct RegisterCompanyCommand {
    pub name: String,
    /// Explicit slug; used verbatim instead of one derived from the name.
    pub slug: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

impl RegisterCompanyCommand {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            website: None,
            logo_url: None,
        }
    }
}

impl CompanyCommandService {
    /// Registers a company, or returns the one already using its name (or the
    /// explicitly requested slug). Derived slugs are suffixed until free.
    pub async fn register_company(
        &self,
        command: RegisterCompanyCommand,
    ) -> ApplicationResult<CompanyRegistration> {
        let name = CompanyName::new(command.name)?;
        if let Some(existing) = self.repo.find_by_name(&name).await? {
            return Ok(CompanyRegistration::Existing(existing.into()));
        }

        let custom_slug = command
            .slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let slug = match custom_slug {
            Some(value) => {
                let slug = CompanySlug::new(value)?;
                if let Some(existing) = self.repo.find_by_slug(&slug).await? {
                    return Ok(CompanyRegistration::Existing(existing.into()));
                }
                slug
            }
            // A derived slug only identifies a company by name, so a different
            // name that slugifies alike ("Acme Ltd." vs "Acme Ltd") gets its
            // own suffixed slug instead of being linked to the existing one.
            None => {
                let base = CompanySlug::new(self.slugger.slugify(name.as_str()))?;
                self.unique_company_slug(&base).await?
            }
        };

        let new_company = NewCompany {
            name: name.clone(),
            slug: slug.clone(),
            website: non_blank(command.website),
            logo_url: non_blank(command.logo_url),
            verified: false,
            created_at: self.clock.now(),
        };

        match self.repo.insert(new_company).await {
            Ok(company) => {
                tracing::info!(company_id = %company.id, slug = %company.slug, "company registered");
                Ok(CompanyRegistration::Created(CompanyDto::from(company)))
            }
            Err(err) if err.is_conflict() => {
                // Lost a race with a concurrent registration of the same company.
                let existing = self
                    .repo
                    .find_by_name_or_slug(&name, &slug)
                    .await?
                    .ok_or_else(|| ApplicationError::conflict(err.to_string()))?;
                Ok(CompanyRegistration::Existing(existing.into()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn unique_company_slug(&self, base: &CompanySlug) -> ApplicationResult<CompanySlug> {
        let mut candidate = base.clone();
        let mut counter = 2u64;
        while self.repo.slug_exists(&candidate).await? {
            candidate = CompanySlug::new(format!("{base}-{counter}"))?;
            counter += 1;
        }
        Ok(candidate)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
