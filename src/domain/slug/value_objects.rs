use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::generate::{generate_slug, is_valid_slug};
use std::{fmt, str::FromStr};

/// A non-empty slug in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug must be lowercase kebab-case: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Slugify `text`, returning `None` when nothing usable remains.
    pub fn from_text(text: &str) -> Option<Self> {
        let generated = generate_slug(text);
        if generated.is_empty() {
            None
        } else {
            Some(Self(generated))
        }
    }

    pub fn with_suffix(&self, counter: u64) -> Self {
        Self(format!("{}-{}", self.0, counter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// How titles are folded before the canonical transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugPolicy {
    /// Non-ASCII characters act as separators.
    #[default]
    Ascii,
    /// Accented and other non-ASCII letters are transliterated first.
    Transliterate,
}

impl SlugPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Transliterate => "transliterate",
        }
    }
}

impl FromStr for SlugPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "transliterate" => Ok(Self::Transliterate),
            other => Err(DomainError::Validation(format!(
                "unknown slug policy: {other}"
            ))),
        }
    }
}

impl fmt::Display for SlugPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
