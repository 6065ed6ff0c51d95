//! Core types - pure abstractions shared across the codebase.

mod link;
mod url;

pub use link::LinkKind;
pub use url::UrlPath;
