use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{ProfileId, ProfileKind, ProfileSlugRepository};
use crate::domain::slug::Slug;

#[derive(Default)]
struct SlugTables {
    by_slug: HashMap<(ProfileKind, Slug), ProfileId>,
    by_profile: HashMap<(ProfileKind, ProfileId), Slug>,
}

/// Process-local slug registry. Both indexes are updated under one write
/// lock so they never disagree.
#[derive(Default)]
pub struct InMemoryProfileSlugRepository {
    tables: RwLock<SlugTables>,
}

impl InMemoryProfileSlugRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileSlugRepository for InMemoryProfileSlugRepository {
    async fn find_by_slug(
        &self,
        kind: ProfileKind,
        slug: &Slug,
    ) -> DomainResult<Option<ProfileId>> {
        let tables = self.tables.read().await;
        Ok(tables.by_slug.get(&(kind, slug.clone())).copied())
    }

    async fn slug_for(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>> {
        let tables = self.tables.read().await;
        Ok(tables.by_profile.get(&(kind, id)).cloned())
    }

    async fn assign(&self, kind: ProfileKind, id: ProfileId, slug: Slug) -> DomainResult<()> {
        let mut tables = self.tables.write().await;

        if let Some(owner) = tables.by_slug.get(&(kind, slug.clone())) {
            if *owner != id {
                return Err(DomainError::Conflict(format!(
                    "{kind} slug already exists: {slug}"
                )));
            }
            return Ok(());
        }

        if let Some(previous) = tables.by_profile.insert((kind, id), slug.clone()) {
            tracing::debug!(%kind, profile_id = %id, %previous, "replacing slug");
            tables.by_slug.remove(&(kind, previous));
        }
        tables.by_slug.insert((kind, slug), id);
        Ok(())
    }

    async fn release(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>> {
        let mut tables = self.tables.write().await;
        let released = tables.by_profile.remove(&(kind, id));
        if let Some(slug) = &released {
            tables.by_slug.remove(&(kind, slug.clone()));
        }
        Ok(released)
    }
}
