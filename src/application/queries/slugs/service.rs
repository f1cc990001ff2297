use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::profile::ProfileSlugRepository;

pub struct SlugQueryService {
    pub(super) repo: Arc<dyn ProfileSlugRepository>,
    pub(super) generator: Arc<dyn SlugGenerator>,
}

impl SlugQueryService {
    pub fn new(repo: Arc<dyn ProfileSlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }
}
