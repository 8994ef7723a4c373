//! Portfolio data document model and loader.
//!
//! The entire site is rendered from a single JSON document. Every field is
//! optional; consumers render nothing (or a default) for absent fields.

pub mod loader;
pub mod schema;

pub use loader::{load_document, LoadError};
pub use schema::{
    About, Availability, Contact, Personal, PortfolioData, Project, ProjectLinks, Resume, Seo,
    Skills, Social, Stats,
};
