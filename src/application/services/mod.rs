// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::slugs::SlugQueryService,
    },
    domain::{profile::ProfileSlugRepository, slug::UniqueSlugService},
};

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(
        slug_repo: Arc<dyn ProfileSlugRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(
            Arc::clone(&slug_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&slug_repo),
            Arc::clone(&slug_service),
        ));
        let slug_queries = Arc::new(SlugQueryService::new(
            Arc::clone(&slug_repo),
            Arc::clone(&slugger),
        ));

        Self {
            slug_commands,
            slug_queries,
        }
    }
}
