// src/domain/job/paths.rs
//! Public URL layout for jobs.
//!
//! Organic jobs live under their type (`/internships/job/{slug}/`), sponsored
//! jobs under the owning company (`/{company}/internships/{slug}/`).

use std::collections::BTreeSet;

use crate::domain::company::CompanySlug;
use crate::domain::job::entity::Job;
use crate::domain::job::value_objects::{JobSlug, JobType};

const ORGANIC_MARKER: &str = "job";
const COMPANY_PREFIX: &str = "company";

pub fn canonical_path(
    slug: &JobSlug,
    job_type: JobType,
    sponsored: bool,
    company: Option<&CompanySlug>,
) -> String {
    let type_segment = job_type.path_segment();
    match company {
        Some(company) if sponsored => format!("/{company}/{type_segment}/{slug}/"),
        _ => format!("/{type_segment}/{ORGANIC_MARKER}/{slug}/"),
    }
}

pub fn type_listing_path(job_type: JobType) -> String {
    format!("/{}/", job_type.path_segment())
}

pub fn company_page_path(company: &CompanySlug) -> String {
    format!("/{COMPANY_PREFIX}/{company}/")
}

/// A public path understood by the job pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRoute {
    TypeListing(JobType),
    Organic {
        job_type: JobType,
        slug: JobSlug,
    },
    Sponsored {
        company: CompanySlug,
        job_type: JobType,
        slug: JobSlug,
    },
    CompanyPage(CompanySlug),
}

impl JobRoute {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [segment] => JobType::from_path_segment(segment).map(JobRoute::TypeListing),
            [prefix, company] if *prefix == COMPANY_PREFIX => CompanySlug::new(*company)
                .ok()
                .map(JobRoute::CompanyPage),
            [first, second, slug] => {
                let slug = JobSlug::new(*slug).ok()?;
                if *second == ORGANIC_MARKER {
                    if let Some(job_type) = JobType::from_path_segment(first) {
                        return Some(JobRoute::Organic { job_type, slug });
                    }
                }
                let job_type = JobType::from_path_segment(second)?;
                let company = CompanySlug::new(*first).ok()?;
                Some(JobRoute::Sponsored {
                    company,
                    job_type,
                    slug,
                })
            }
            _ => None,
        }
    }

    /// Canonical rendering of the route; type aliases and case are normalised.
    pub fn to_path(&self) -> String {
        match self {
            JobRoute::TypeListing(job_type) => type_listing_path(*job_type),
            JobRoute::Organic { job_type, slug } => canonical_path(slug, *job_type, false, None),
            JobRoute::Sponsored {
                company,
                job_type,
                slug,
            } => canonical_path(slug, *job_type, true, Some(company)),
            JobRoute::CompanyPage(company) => company_page_path(company),
        }
    }
}

/// Public pages that render a given job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    pub canonical: String,
    pub type_listing: String,
    pub company_page: String,
}

impl JobPaths {
    pub fn of(job: &Job) -> Self {
        Self {
            canonical: job.canonical_path(),
            type_listing: type_listing_path(job.details.job_type),
            company_page: company_page_path(&job.company.slug),
        }
    }
}

/// Paths whose cached render is stale after a job moved from `previous`
/// (if any) to `current`.
pub fn revalidation_paths(
    current: &JobPaths,
    previous: Option<&JobPaths>,
    dashboard: &str,
) -> BTreeSet<String> {
    let mut paths = BTreeSet::from([
        dashboard.to_string(),
        current.canonical.clone(),
        current.type_listing.clone(),
        current.company_page.clone(),
    ]);
    if let Some(previous) = previous {
        paths.insert(previous.canonical.clone());
        paths.insert(previous.type_listing.clone());
        paths.insert(previous.company_page.clone());
    }
    paths
}
