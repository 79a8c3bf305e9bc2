// src/application/ports/util.rs

/// Turns free text into a URL path segment.
///
/// Implementations never return an empty string; they substitute their own
/// fallback literal instead.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
