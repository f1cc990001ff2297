pub mod slugs;

pub use slugs::{ProfileSlugDto, SlugPreviewDto};
