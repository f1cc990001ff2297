// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Must return either an empty string or a canonical slug.
    fn slugify(&self, input: &str) -> String;
}
