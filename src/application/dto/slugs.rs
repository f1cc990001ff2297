use crate::domain::profile::{ProfileId, ProfileKind, ProfilePath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSlugDto {
    pub kind: ProfileKind,
    pub profile_id: i64,
    pub slug: String,
    pub path: String,
}

impl ProfileSlugDto {
    pub fn new(id: ProfileId, path: ProfilePath) -> Self {
        Self {
            kind: path.kind,
            profile_id: id.into(),
            path: path.to_string(),
            slug: path.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlugPreviewDto {
    pub input: String,
    pub slug: String,
    pub is_empty: bool,
}

impl SlugPreviewDto {
    pub fn new(input: String, slug: String) -> Self {
        Self {
            is_empty: slug.is_empty(),
            input,
            slug,
        }
    }
}
