//! Route registry: an ordered list of `(pattern, page)` pairs.
//!
//! The table is supplied once at startup and never mutated afterwards.
//! Matching is first-match-wins in registration order; there is no
//! priority machinery beyond the order routes were added. An unmatched
//! path is `None`, and the caller decides what fallback to render.

use crate::pattern::{Params, Pattern};

/// One registered route.
#[derive(Debug, Clone)]
struct RouteEntry<P> {
    pattern: Pattern,
    page: P,
}

/// Result of matching a path against the table.
#[derive(Debug)]
pub struct RouteMatch<'a, P> {
    /// The pattern text that matched, e.g. `/writing/:postId`.
    pub pattern: &'a str,
    /// Parameters captured from the path.
    pub params: Params,
    /// The page registered for the matching pattern.
    pub page: &'a P,
}

/// Ordered route registry.
///
/// # Examples
///
/// ```
/// use folio_router::RouteTable;
///
/// let table = RouteTable::new()
///     .with_route("/", "home")
///     .with_route("/writing/:postId", "post");
///
/// let m = table.match_path("/writing/abc-123").unwrap();
/// assert_eq!(m.pattern, "/writing/:postId");
/// assert_eq!(m.params.get("postId"), Some(&"abc-123".to_string()));
/// assert_eq!(*m.page, "post");
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    routes: Vec<RouteEntry<P>>,
}

impl<P> RouteTable<P> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route (builder style). Registration order is match order.
    pub fn with_route(mut self, pattern: &str, page: P) -> Self {
        self.routes.push(RouteEntry {
            pattern: Pattern::parse(pattern),
            page,
        });
        self
    }

    /// Matches a path, returning the first entry whose pattern accepts it.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, P>> {
        self.routes.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|params| RouteMatch {
                pattern: entry.pattern.as_str(),
                params,
                page: &entry.page,
            })
        })
    }

    /// Registered pattern texts, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|entry| entry.pattern.as_str())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<P> Default for RouteTable<P> {
    fn default() -> Self {
        Self::new()
    }
}
