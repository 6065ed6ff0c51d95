//! Content store: FAQ entries loaded from frontmatter-bearing files.
//!
//! Each `.md` file in the content directory is one record: TOML
//! frontmatter between `+++` fences (title, ordering, trigger links)
//! followed by the prose answer.

mod entry;
mod frontmatter;
mod store;

pub use entry::FaqEntry;
pub use frontmatter::{EntryMeta, detect_frontmatter};
pub use store::ContentStore;

use std::path::PathBuf;
use thiserror::Error;

/// Content-related errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}`: missing `+++` frontmatter fence")]
    MissingFrontmatter(PathBuf),

    #[error("`{0}`: invalid frontmatter")]
    Frontmatter(PathBuf, #[source] toml::de::Error),

    #[error("`{0}`: frontmatter has no `title`")]
    MissingTitle(PathBuf),

    #[error("route conflict: `{route}` produced by both `{first}` and `{second}`")]
    RouteConflict {
        route: String,
        first: PathBuf,
        second: PathBuf,
    },
}
