use std::sync::Arc;

use crate::domain::{profile::ProfileSlugRepository, slug::UniqueSlugService};

pub struct SlugCommandService {
    pub(super) repo: Arc<dyn ProfileSlugRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
}

impl SlugCommandService {
    pub fn new(
        repo: Arc<dyn ProfileSlugRepository>,
        slug_service: Arc<UniqueSlugService>,
    ) -> Self {
        Self { repo, slug_service }
    }
}
