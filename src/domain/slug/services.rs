use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::profile::{ProfileId, ProfileKind, ProfileSlugRepository, ProfileTitle};
use crate::domain::slug::value_objects::Slug;

/// Domain service responsible for producing unique slugs for profiles.
pub struct UniqueSlugService {
    repo: Arc<dyn ProfileSlugRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl UniqueSlugService {
    pub fn new(
        repo: Arc<dyn ProfileSlugRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            generator,
            clock,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        kind: ProfileKind,
        title: &ProfileTitle,
        ignore_id: Option<ProfileId>,
    ) -> DomainResult<Slug> {
        let generated = self.generator.slugify(title.as_str());
        let base = if generated.is_empty() {
            let fallback = format!("{}-{}", kind.as_str(), self.clock.now().timestamp());
            tracing::debug!(%kind, title = %title, %fallback, "title produced empty slug");
            Slug::new(fallback)?
        } else {
            Slug::new(generated)?
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            match self.repo.find_by_slug(kind, &candidate).await? {
                Some(owner) if ignore_id == Some(owner) => return Ok(candidate),
                Some(_) => {
                    candidate = base.with_suffix(counter);
                    counter += 1;
                }
                None => return Ok(candidate),
            }
        }
    }
}
