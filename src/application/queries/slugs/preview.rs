use super::SlugQueryService;
use crate::application::dto::SlugPreviewDto;

pub struct PreviewSlugQuery {
    pub title: String,
}

impl SlugQueryService {
    /// Slugify a title without reserving anything. An empty result is
    /// reported rather than rejected; callers pick their own fallback.
    pub fn preview_slug(&self, query: PreviewSlugQuery) -> SlugPreviewDto {
        let slug = self.generator.slugify(&query.title);
        SlugPreviewDto::new(query.title, slug)
    }
}
