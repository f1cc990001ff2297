//! Slug generation and profile path allocation for event, venue, and
//! organisation pages.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::slug::generate_slug;
