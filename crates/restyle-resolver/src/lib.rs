//! Restyle Resolver
//!
//! Holds the fixed catalog of style templates and turns a classified tag
//! set into exactly one [`ResolvedStyle`].
//!
//! Resolution is total: every tag set, including the empty one, produces
//! a style (the `default` template is the fallback). Precedence is fixed:
//! explicit theme tags beat mood tags beat hue-only tags for structural
//! properties, and the first-detected hue always overrides the winning
//! template's colors.

pub mod registry;
pub mod resolve;
pub mod template;

pub use registry::Registry;
pub use resolve::resolve;
pub use template::{Decoration, Density, FontStack, ResolvedStyle, Scheme, ShadowLevel, StyleParams, Template};

/// Registry lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no template named '{name}'")]
    NotFound { name: String },
}
