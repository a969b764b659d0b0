//! # Folio Router
//!
//! The navigation core of the folio site: a small client-style router
//! with support for:
//! - Static routes (`/focus`)
//! - Dynamic parameters (`/writing/:postId`)
//! - An ordered, first-match-wins route registry with a caller-supplied
//!   fallback for unmatched paths
//! - History synchronization behind a [`NavigationHost`] seam
//! - Per-path scroll memory with settle-based restoration
//!
//! ## Path Normalization
//!
//! Handles the common user mistakes gracefully:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Design
//!
//! Patterns carry their own capture syntax at registration time, so no
//! path is special-cased ahead of the generic matcher. The [`Navigator`]
//! is an explicit value threaded through the application rather than
//! ambient global state, and scroll restoration is tied to a navigation
//! sequence ticket instead of a bare timer, so a late settle can never
//! fire against a newer navigation.
//!
//! ## Example
//!
//! ```
//! use folio_router::RouteTable;
//!
//! let table = RouteTable::new()
//!     .with_route("/", "home")
//!     .with_route("/writing/:postId", "post");
//!
//! let m = table.match_path("/writing/abc-123").unwrap();
//! assert_eq!(m.params.get("postId"), Some(&"abc-123".to_string()));
//! ```

pub mod nav;
pub mod path;
pub mod pattern;
pub mod scroll;
pub mod table;

pub use nav::{NavSeq, NavigationHost, NavigationState, Navigator, ScrollAction};
pub use path::{is_canonical_path, normalize_path};
pub use pattern::{classify_segment, Params, Pattern, Segment};
pub use scroll::ScrollMemory;
pub use table::{RouteMatch, RouteTable};
