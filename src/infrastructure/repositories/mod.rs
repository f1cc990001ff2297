// src/infrastructure/repositories/mod.rs
mod memory_profile_slug;

pub use memory_profile_slug::InMemoryProfileSlugRepository;
