//! Static site builder for folio portfolios.
//!
//! Populates a pre-authored page skeleton from the portfolio data document,
//! renders the generated regions (skills, project cards), upserts SEO meta
//! tags, and writes the effects assets.

pub mod assets;
pub mod bindings;
pub mod builder;
pub mod cards;
pub mod html;
pub mod seo;
pub mod templates;

pub use bindings::{bindings, Binding, Region, Target};
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
