// Site content
// Hard-coded data behind the pages: projects, timeline entries, and posts.
// The text itself is presentation, not contract; pages only rely on the
// lookup functions here.

pub mod posts;
pub mod projects;
pub mod timeline;

pub use posts::{post_by_slug, posts, Post};
pub use projects::{projects, Project};
pub use timeline::{timeline_entries, TimelineEntry};
