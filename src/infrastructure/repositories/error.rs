use crate::domain::errors::DomainError;

const CNT_JOB_SPONSORED_SLUG: &str = "jobs_sponsored_slug_key";
const CNT_JOB_ORGANIC_SLUG: &str = "jobs_organic_slug_key";
const CNT_JOB_COMPANY: &str = "jobs_company_id_fkey";
const CNT_JOB_SALARY_RANGE: &str = "jobs_salary_range_chk";
const CNT_COMPANY_NAME: &str = "companies_name_key";
const CNT_COMPANY_SLUG: &str = "companies_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_JOB_SPONSORED_SLUG | CNT_JOB_ORGANIC_SLUG => {
                        DomainError::Conflict("job slug already exists in scope".into())
                    }
                    CNT_COMPANY_NAME => DomainError::Conflict("company name already exists".into()),
                    CNT_COMPANY_SLUG => DomainError::Conflict("company slug already exists".into()),
                    CNT_JOB_COMPANY => DomainError::NotFound("company not found".into()),
                    CNT_JOB_SALARY_RANGE => DomainError::Validation(
                        "salary minimum cannot exceed maximum".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
