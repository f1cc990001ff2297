use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Event,
    Venue,
    Organisation,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [Self::Event, Self::Venue, Self::Organisation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Venue => "venue",
            Self::Organisation => "organisation",
        }
    }

    /// Collection segment used in navigational URLs.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Event => "events",
            Self::Venue => "venues",
            Self::Organisation => "organisations",
        }
    }
}

impl FromStr for ProfileKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered || kind.path_segment() == lowered)
            .ok_or_else(|| DomainError::Validation(format!("unknown profile kind: {s}")))
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "profile id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<ProfileId> for i64 {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTitle(String);

impl ProfileTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigational path of a profile page, e.g. `/venues/the-jazz-cellar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePath {
    pub kind: ProfileKind,
    pub slug: Slug,
}

impl ProfilePath {
    pub fn new(kind: ProfileKind, slug: Slug) -> Self {
        Self { kind, slug }
    }
}

impl fmt::Display for ProfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.kind.path_segment(), self.slug)
    }
}
