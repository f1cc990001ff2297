use crate::domain::errors::DomainResult;
use crate::domain::profile::value_objects::{ProfileId, ProfileKind};
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Registry of assigned slugs. Slugs are unique within a profile kind.
#[async_trait]
pub trait ProfileSlugRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        kind: ProfileKind,
        slug: &Slug,
    ) -> DomainResult<Option<ProfileId>>;
    async fn slug_for(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>>;
    /// Replaces any slug previously held by `id`. Fails with `Conflict` when
    /// another profile of the same kind owns `slug`.
    async fn assign(&self, kind: ProfileKind, id: ProfileId, slug: Slug) -> DomainResult<()>;
    async fn release(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>>;
}
