use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::{SlugPolicy, generate_slug};

/// Canonical ASCII-only slugs; non-ASCII characters act as separators.
#[derive(Default, Clone)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}

/// Folds accented and non-Latin letters to ASCII before the canonical
/// transform, so "Crème" becomes "creme" instead of "cr-me".
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(&slug::slugify(input))
    }
}

pub fn generator_for(policy: SlugPolicy) -> Arc<dyn SlugGenerator> {
    match policy {
        SlugPolicy::Ascii => Arc::new(AsciiSlugGenerator),
        SlugPolicy::Transliterate => Arc::new(TransliteratingSlugGenerator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_policy_drops_accented_letters() {
        assert_eq!(AsciiSlugGenerator.slugify("Crème Brûlée"), "cr-me-br-l-e");
    }

    #[test]
    fn transliterating_policy_folds_accents() {
        assert_eq!(
            TransliteratingSlugGenerator.slugify("Crème Brûlée Café"),
            "creme-brulee-cafe"
        );
    }

    #[test]
    fn transliterating_policy_keeps_canonical_contract() {
        let slug = TransliteratingSlugGenerator.slugify("  O'Brien's -- Pub!! ");
        assert_eq!(slug, "o-brien-s-pub");
        assert_eq!(TransliteratingSlugGenerator.slugify(""), "");
    }

    #[test]
    fn generator_for_follows_policy() {
        assert_eq!(generator_for(SlugPolicy::Ascii).slugify("Zoë"), "zo");
        assert_eq!(generator_for(SlugPolicy::Transliterate).slugify("Zoë"), "zoe");
    }
}
