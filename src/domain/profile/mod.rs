pub mod repository;
pub mod value_objects;

pub use repository::ProfileSlugRepository;
pub use value_objects::{ProfileId, ProfileKind, ProfilePath, ProfileTitle};
