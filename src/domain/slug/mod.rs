pub mod generate;
pub mod services;
pub mod value_objects;

pub use generate::{generate_slug, is_valid_slug};
pub use services::UniqueSlugService;
pub use value_objects::{Slug, SlugPolicy};
