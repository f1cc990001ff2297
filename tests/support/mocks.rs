// tests/support/mocks.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use profile_slugs::application::ports::{time::Clock, util::SlugGenerator};
use profile_slugs::domain::errors::{DomainError, DomainResult};
use profile_slugs::domain::profile::{ProfileId, ProfileKind, ProfileSlugRepository};
use profile_slugs::domain::slug::Slug;
use profile_slugs::infrastructure::repositories::InMemoryProfileSlugRepository;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Returns the same slug for every input and remembers what it was asked.
pub struct StaticSlug {
    pub output: String,
    pub calls: Mutex<Vec<String>>,
}

impl StaticSlug {
    pub fn new(output: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            output: output.into(),
            calls: Mutex::new(Vec::new()),
        })
    }
}

impl SlugGenerator for StaticSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls.lock().unwrap().push(input.to_string());
        self.output.clone()
    }
}

/// Repository whose every call fails, for error-path tests.
pub struct FailingSlugRepo;

#[async_trait]
impl ProfileSlugRepository for FailingSlugRepo {
    async fn find_by_slug(
        &self,
        _kind: ProfileKind,
        _slug: &Slug,
    ) -> DomainResult<Option<ProfileId>> {
        Err(DomainError::Persistence("registry offline".into()))
    }

    async fn slug_for(&self, _kind: ProfileKind, _id: ProfileId) -> DomainResult<Option<Slug>> {
        Err(DomainError::Persistence("registry offline".into()))
    }

    async fn assign(&self, _kind: ProfileKind, _id: ProfileId, _slug: Slug) -> DomainResult<()> {
        Err(DomainError::Persistence("registry offline".into()))
    }

    async fn release(&self, _kind: ProfileKind, _id: ProfileId) -> DomainResult<Option<Slug>> {
        Err(DomainError::Persistence("registry offline".into()))
    }
}

/// Wraps the in-memory registry and yields after every lookup so
/// concurrent claims interleave between lookup and assign.
#[derive(Default)]
pub struct YieldingSlugRepo {
    inner: InMemoryProfileSlugRepository,
}

#[async_trait]
impl ProfileSlugRepository for YieldingSlugRepo {
    async fn find_by_slug(
        &self,
        kind: ProfileKind,
        slug: &Slug,
    ) -> DomainResult<Option<ProfileId>> {
        let found = self.inner.find_by_slug(kind, slug).await;
        tokio::task::yield_now().await;
        found
    }

    async fn slug_for(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>> {
        self.inner.slug_for(kind, id).await
    }

    async fn assign(&self, kind: ProfileKind, id: ProfileId, slug: Slug) -> DomainResult<()> {
        self.inner.assign(kind, id, slug).await
    }

    async fn release(&self, kind: ProfileKind, id: ProfileId) -> DomainResult<Option<Slug>> {
        self.inner.release(kind, id).await
    }
}

/// Lookups always report a free slug but every assign loses the race.
#[derive(Default)]
pub struct AlwaysContendedRepo {
    pub assign_calls: AtomicUsize,
}

#[async_trait]
impl ProfileSlugRepository for AlwaysContendedRepo {
    async fn find_by_slug(
        &self,
        _kind: ProfileKind,
        _slug: &Slug,
    ) -> DomainResult<Option<ProfileId>> {
        Ok(None)
    }

    async fn slug_for(&self, _kind: ProfileKind, _id: ProfileId) -> DomainResult<Option<Slug>> {
        Ok(None)
    }

    async fn assign(&self, kind: ProfileKind, _id: ProfileId, slug: Slug) -> DomainResult<()> {
        self.assign_calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Conflict(format!("{kind} slug already exists: {slug}")))
    }

    async fn release(&self, _kind: ProfileKind, _id: ProfileId) -> DomainResult<Option<Slug>> {
        Ok(None)
    }
}
