// src/application/commands/jobs/input.rs
use chrono::{DateTime, Utc};

use crate::{
    application::error::ApplicationResult,
    domain::job::{JobDetails, JobKind, JobTitle, JobType},
};

/// Listing fields submitted by the admin and employer job forms.
#[derive(Debug, Clone, Default)]
pub struct JobInput {
    pub title: String,
    pub job_type: JobType,
    pub kind: JobKind,
    pub sponsored: bool,
    pub verified: bool,
    pub description: Option<String>,
    pub apply_url: String,
    pub locations: Vec<String>,
    pub sectors: Vec<String>,
    pub tags: Vec<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub currency: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

impl JobInput {
    pub fn new(title: impl Into<String>, job_type: JobType, apply_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            job_type,
            apply_url: apply_url.into(),
            ..Self::default()
        }
    }

    pub fn sponsored(mut self, sponsored: bool) -> Self {
        self.sponsored = sponsored;
        self
    }

    pub(super) fn into_details(self) -> ApplicationResult<JobDetails> {
        let details = JobDetails {
            title: JobTitle::new(self.title)?,
            job_type: self.job_type,
            kind: self.kind,
            sponsored: self.sponsored,
            verified: self.verified,
            description: non_blank(self.description),
            apply_url: self.apply_url.trim().to_string(),
            locations: clean_list(self.locations),
            sectors: clean_list(self.sectors),
            tags: clean_list(self.tags),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            currency: non_blank(self.currency),
            deadline: self.deadline,
        };
        details.validate()?;
        Ok(details)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
