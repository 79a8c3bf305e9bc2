use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub i64);

impl JobId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("job id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<JobId> for i64 {
    fn from(value: JobId) -> Self {
        value.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitle(String);

impl JobTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<JobTitle> for String {
    fn from(value: JobTitle) -> Self {
        value.0
    }
}

/// True when `value` matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn is_slug_shaped(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobSlug(String);

impl JobSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_slug_shaped(&value) {
            return Err(DomainError::Validation(format!(
                "job slug '{value}' must be lowercase kebab-case"
            )));
        }
        Ok(Self(value))
    }

    /// `base-{n}`, the candidate tried after `n - 1` collisions.
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<JobSlug> for String {
    fn from(value: JobSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    WorkExperience,
    Apprenticeship,
    Internship,
    Placement,
    GraduateScheme,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::WorkExperience,
        JobType::Apprenticeship,
        JobType::Internship,
        JobType::Placement,
        JobType::GraduateScheme,
    ];

    /// Stored name, e.g. `GRADUATE_SCHEME`.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::WorkExperience => "WORK_EXPERIENCE",
            JobType::Apprenticeship => "APPRENTICESHIP",
            JobType::Internship => "INTERNSHIP",
            JobType::Placement => "PLACEMENT",
            JobType::GraduateScheme => "GRADUATE_SCHEME",
        }
    }

    /// Public URL segment for listings and organic job pages.
    pub fn path_segment(&self) -> &'static str {
        match self {
            JobType::WorkExperience => "work-experience",
            JobType::Apprenticeship => "apprenticeships",
            JobType::Internship => "internships",
            JobType::Placement => "placements",
            JobType::GraduateScheme => "graduate-schemes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::WorkExperience => "Work Experience",
            JobType::Apprenticeship => "Apprenticeships",
            JobType::Internship => "Internships",
            JobType::Placement => "Placements",
            JobType::GraduateScheme => "Graduate Schemes",
        }
    }

    /// Inverse of [`JobType::path_segment`]. Case-insensitive; the graduate
    /// scheme segment is also accepted in singular form.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "work-experience" => Some(JobType::WorkExperience),
            "apprenticeships" => Some(JobType::Apprenticeship),
            "internships" => Some(JobType::Internship),
            "placements" => Some(JobType::Placement),
            "graduate-scheme" | "graduate-schemes" => Some(JobType::GraduateScheme),
            _ => None,
        }
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::GraduateScheme
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown job type '{s}'")))
    }
}

/// Path segment for a raw type name; unknown names fall back to the
/// graduate scheme listing.
pub fn type_segment_for_name(name: &str) -> &'static str {
    name.parse::<JobType>()
        .unwrap_or_default()
        .path_segment()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobKind {
    #[default]
    Scheme,
    Live,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Scheme => "SCHEME",
            JobKind::Live => "LIVE",
        }
    }
}

impl FromStr for JobKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEME" => Ok(JobKind::Scheme),
            "LIVE" => Ok(JobKind::Live),
            other => Err(DomainError::Validation(format!("unknown job kind '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "DRAFT",
            JobStatus::Published => "PUBLISHED",
            JobStatus::Archived => "ARCHIVED",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, JobStatus::Published)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(JobStatus::Draft),
            "PUBLISHED" => Ok(JobStatus::Published),
            "ARCHIVED" => Ok(JobStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown job status '{other}'"
            ))),
        }
    }
}
