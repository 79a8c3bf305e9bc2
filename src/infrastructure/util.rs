use crate::application::ports::util::SlugGenerator;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub const JOB_SLUG_FALLBACK: &str = "job";
pub const COMPANY_SLUG_FALLBACK: &str = "company";
const COMPANY_SLUG_MAX_LEN: usize = 60;

/// Slug for a job title: accents folded, lowercase ASCII, hyphen separated.
///
/// Characters outside `[a-z0-9]` and the separators (whitespace, `/`, `_`,
/// `-`) are dropped rather than turned into hyphens, so "R&D" becomes "rd".
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match ch {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            '-' | '/' | '_' => pending_hyphen = true,
            c if c.is_whitespace() => pending_hyphen = true,
            _ => {}
        }
    }

    if slug.is_empty() {
        JOB_SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}

/// Slug for a company name, cut to 60 characters. Non-ASCII text is
/// transliterated rather than dropped ("Café" → "cafe", "日本" → "ri-ben").
pub fn slugify_company_name(name: &str) -> String {
    let slug = slug::slugify(name);
    let cut: String = slug.chars().take(COMPANY_SLUG_MAX_LEN).collect();
    let cut = cut.trim_matches('-');
    if cut.is_empty() {
        COMPANY_SLUG_FALLBACK.to_string()
    } else {
        cut.to_string()
    }
}

#[derive(Default, Clone)]
pub struct JobTitleSlugGenerator;

impl SlugGenerator for JobTitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify_title(input)
    }
}

#[derive(Default, Clone)]
pub struct CompanyNameSlugGenerator;

impl SlugGenerator for CompanyNameSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify_company_name(input)
    }
}
