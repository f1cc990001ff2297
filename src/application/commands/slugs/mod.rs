// src/application/commands/slugs/mod.rs
mod claim;
mod release;
mod service;

pub use claim::{ClaimSlugCommand, ClaimSlugCommandBuilder};
pub use release::ReleaseSlugCommand;
pub use service::SlugCommandService;
