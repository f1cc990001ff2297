mod path;
mod preview;
mod resolve;
mod service;

pub use path::ProfilePathQuery;
pub use preview::PreviewSlugQuery;
pub use resolve::ResolveSlugQuery;
pub use service::SlugQueryService;
