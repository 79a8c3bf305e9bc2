// src/application/commands/companies/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::company::CompanyRepository,
};

pub struct CompanyCommandService {
    pub(super) repo: Arc<dyn CompanyRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CompanyCommandService {
    pub fn new(
        repo: Arc<dyn CompanyRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
        }
    }
}
