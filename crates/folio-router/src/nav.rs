//! Navigation state and browser-history synchronization.
//!
//! The [`Navigator`] is an explicit value owned by the application entry
//! point and threaded through wherever navigation is needed; there is no
//! module-level global. Browser integration sits behind the
//! [`NavigationHost`] trait so a session can be driven by a real host or a
//! test double.
//!
//! Scroll restoration is settle-based rather than timer-based: every
//! navigation returns a [`NavSeq`] ticket, and [`Navigator::settle`]
//! applies the scroll action only while that ticket is still the newest
//! one. A ticket that was overtaken by a later navigation settles as
//! [`ScrollAction::Superseded`] and touches nothing.

use crate::pattern::Params;
use crate::scroll::ScrollMemory;
use crate::table::{RouteMatch, RouteTable};

/// Seam between the navigator and the hosting environment.
///
/// A browser host maps these onto `history.pushState`,
/// `history.replaceState`, `window.scrollY`, and `window.scrollTo`; tests
/// use an in-memory double.
pub trait NavigationHost {
    /// Pushes a new history entry whose state payload is the path itself.
    fn push_state(&mut self, path: &str);
    /// Replaces the current history entry.
    fn replace_state(&mut self, path: &str);
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> u32;
    /// Scrolls the viewport to a vertical offset.
    fn scroll_to(&mut self, offset: u32);
}

/// In-memory navigation state, owned exclusively by the [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Normalized current path.
    pub path: String,
    /// Pattern text of the matching route, or `None` when nothing matched
    /// (the renderer shows the fallback in that case).
    pub pattern: Option<String>,
    /// Parameters captured from the current path.
    pub params: Params,
}

/// Ticket identifying one navigation for scroll settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSeq(u64);

/// Outcome of settling a navigation's scroll action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// A remembered offset for the destination path was restored.
    Restored(u32),
    /// No remembered offset; the viewport was reset to the top.
    Top,
    /// A newer navigation happened first; nothing was touched.
    Superseded,
}

/// Synchronizes in-memory navigation state with the host's history and
/// scroll position.
///
/// # Examples
///
/// ```
/// use folio_router::{NavigationHost, Navigator, RouteTable};
///
/// struct NoopHost;
/// impl NavigationHost for NoopHost {
///     fn push_state(&mut self, _path: &str) {}
///     fn replace_state(&mut self, _path: &str) {}
///     fn scroll_offset(&self) -> u32 { 0 }
///     fn scroll_to(&mut self, _offset: u32) {}
/// }
///
/// let table = RouteTable::new()
///     .with_route("/", "home")
///     .with_route("/writing/:postId", "post");
/// let mut nav = Navigator::new(table, NoopHost, "/");
///
/// let seq = nav.navigate("/writing/my-post");
/// assert_eq!(nav.state().pattern.as_deref(), Some("/writing/:postId"));
/// assert_eq!(nav.state().params.get("postId"), Some(&"my-post".to_string()));
/// nav.settle(seq);
/// ```
pub struct Navigator<P, H: NavigationHost> {
    table: RouteTable<P>,
    host: H,
    state: NavigationState,
    scroll: ScrollMemory,
    seq: u64,
}

impl<P, H: NavigationHost> Navigator<P, H> {
    /// Creates a navigator seeded from the host's current URL path.
    ///
    /// The initial match does not touch history; the browser already has
    /// the entry for the page it loaded.
    pub fn new(table: RouteTable<P>, host: H, initial_path: &str) -> Self {
        let state = resolve_state(&table, initial_path);
        Self {
            table,
            host,
            state,
            scroll: ScrollMemory::new(),
            seq: 0,
        }
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The route table this navigator matches against.
    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    /// Scroll memory accumulated this session.
    pub fn scroll_memory(&self) -> &ScrollMemory {
        &self.scroll
    }

    /// The hosting environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the hosting environment.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Match for the current path, or `None` when the fallback applies.
    pub fn current_match(&self) -> Option<RouteMatch<'_, P>> {
        self.table.match_path(&self.state.path)
    }

    /// Navigates to `path`, pushing a new history entry.
    ///
    /// Side effects, in order: snapshot the scroll offset of the path
    /// being left, update in-memory state, push the history entry, and
    /// return the settle ticket for the deferred scroll action.
    pub fn navigate(&mut self, path: &str) -> NavSeq {
        self.apply(path, false)
    }

    /// Navigates to `path`, replacing the current history entry.
    pub fn navigate_replace(&mut self, path: &str) -> NavSeq {
        self.apply(path, true)
    }

    /// Mirrors a browser back/forward event into in-memory state.
    ///
    /// The browser already moved its history pointer, so no history call
    /// is made; the returned ticket still drives scroll restoration.
    pub fn handle_popstate(&mut self, path: &str) -> NavSeq {
        self.state = resolve_state(&self.table, path);
        self.next_seq()
    }

    /// Applies the scroll action for a navigation, unless a newer one
    /// has superseded it.
    pub fn settle(&mut self, seq: NavSeq) -> ScrollAction {
        if seq.0 != self.seq {
            return ScrollAction::Superseded;
        }
        match self.scroll.restore(&self.state.path) {
            Some(offset) => {
                self.host.scroll_to(offset);
                ScrollAction::Restored(offset)
            }
            None => {
                self.host.scroll_to(0);
                ScrollAction::Top
            }
        }
    }

    fn apply(&mut self, path: &str, replace: bool) -> NavSeq {
        let leaving = self.state.path.clone();
        self.scroll.save(&leaving, self.host.scroll_offset());

        self.state = resolve_state(&self.table, path);

        if replace {
            self.host.replace_state(&self.state.path);
        } else {
            self.host.push_state(&self.state.path);
        }

        self.next_seq()
    }

    fn next_seq(&mut self) -> NavSeq {
        self.seq += 1;
        NavSeq(self.seq)
    }
}

fn resolve_state<P>(table: &RouteTable<P>, path: &str) -> NavigationState {
    let path = crate::path::normalize_path(path).into_owned();
    match table.match_path(&path) {
        Some(m) => NavigationState {
            pattern: Some(m.pattern.to_string()),
            params: m.params,
            path,
        },
        None => NavigationState {
            pattern: None,
            params: Params::new(),
            path,
        },
    }
}
