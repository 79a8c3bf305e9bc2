use crate::domain::company::entity::{Company, NewCompany};
use crate::domain::company::value_objects::{CompanyId, CompanyName, CompanySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>>;
    async fn find_by_name(&self, name: &CompanyName) -> DomainResult<Option<Company>>;
    async fn find_by_slug(&self, slug: &CompanySlug) -> DomainResult<Option<Company>>;
    /// First company whose name or slug matches either value.
    async fn find_by_name_or_slug(
        &self,
        name: &CompanyName,
        slug: &CompanySlug,
    ) -> DomainResult<Option<Company>>;
    async fn slug_exists(&self, slug: &CompanySlug) -> DomainResult<bool>;
    async fn insert(&self, company: NewCompany) -> DomainResult<Company>;
}
