//! Navigation session tests for folio-router.
//!
//! These drive a `Navigator` through a fake browser host with a real
//! history stack, covering:
//! - push/replace history synchronization
//! - popstate round trips (back/forward)
//! - navigate idempotence
//! - scroll snapshot, restoration, and settle supersession

use folio_router::{NavigationHost, Navigator, RouteTable, ScrollAction};
use pretty_assertions::assert_eq;

/// Fake browser: a history stack with a cursor, plus a scroll position.
struct FakeBrowser {
    entries: Vec<String>,
    cursor: usize,
    scroll_y: u32,
}

impl FakeBrowser {
    fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
            scroll_y: 0,
        }
    }

    /// Simulates the user pressing Back; returns the state payload the
    /// browser would hand to a popstate listener.
    fn back(&mut self) -> String {
        assert!(self.cursor > 0, "no earlier history entry");
        self.cursor -= 1;
        self.entries[self.cursor].clone()
    }

    fn forward(&mut self) -> String {
        assert!(self.cursor + 1 < self.entries.len(), "no later history entry");
        self.cursor += 1;
        self.entries[self.cursor].clone()
    }
}

impl NavigationHost for FakeBrowser {
    fn push_state(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor += 1;
    }

    fn replace_state(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }

    fn scroll_offset(&self) -> u32 {
        self.scroll_y
    }

    fn scroll_to(&mut self, offset: u32) {
        self.scroll_y = offset;
    }
}

fn site_table() -> RouteTable<&'static str> {
    RouteTable::new()
        .with_route("/", "home")
        .with_route("/focus", "focus")
        .with_route("/background", "background")
        .with_route("/writing", "writing")
        .with_route("/writing/:postId", "writing-post")
        .with_route("/blog/:postId", "writing-post")
        .with_route("/contact", "contact")
        .with_route("/demo", "demo")
        .with_route("/demo/:page", "demo-page")
}

fn navigator() -> Navigator<&'static str, FakeBrowser> {
    Navigator::new(site_table(), FakeBrowser::new("/"), "/")
}

#[test]
fn test_initial_state_seeded_from_url() {
    let nav = Navigator::new(site_table(), FakeBrowser::new("/writing/my-post"), "/writing/my-post");
    assert_eq!(nav.state().pattern.as_deref(), Some("/writing/:postId"));
    assert_eq!(nav.state().params.get("postId"), Some(&"my-post".to_string()));
}

#[test]
fn test_navigate_matches_writing_post() {
    let mut nav = navigator();
    nav.navigate("/writing/my-post");
    assert_eq!(nav.state().pattern.as_deref(), Some("/writing/:postId"));
    assert_eq!(nav.state().params.get("postId"), Some(&"my-post".to_string()));
}

#[test]
fn test_navigate_matches_legacy_blog_alias() {
    let mut nav = navigator();
    nav.navigate("/blog/legacy-post");
    assert_eq!(nav.state().pattern.as_deref(), Some("/blog/:postId"));
    assert_eq!(nav.state().params.get("postId"), Some(&"legacy-post".to_string()));
}

#[test]
fn test_navigate_is_idempotent() {
    let mut nav = navigator();
    nav.navigate("/focus");
    let after_first = nav.state().clone();

    nav.navigate("/focus");
    assert_eq!(nav.state(), &after_first);
}

#[test]
fn test_popstate_round_trip_restores_home() {
    let mut nav = navigator();
    nav.navigate("/focus");
    assert_eq!(nav.state().pattern.as_deref(), Some("/focus"));

    // User presses Back; the browser delivers the prior recorded state.
    let prior = nav_host_back(&mut nav);
    nav.handle_popstate(&prior);
    assert_eq!(nav.state().pattern.as_deref(), Some("/"));
}

#[test]
fn test_back_then_forward() {
    let mut nav = navigator();
    nav.navigate("/background");

    let prior = nav_host_back(&mut nav);
    nav.handle_popstate(&prior);
    assert_eq!(nav.state().path, "/");

    let next = nav_host_forward(&mut nav);
    nav.handle_popstate(&next);
    assert_eq!(nav.state().pattern.as_deref(), Some("/background"));
}

#[test]
fn test_scroll_restored_when_revisiting() {
    let mut nav = navigator();

    // Scroll down the writing index, then leave it.
    nav.navigate("/writing");
    scroll_browser(&mut nav, 900);
    let seq = nav.navigate("/writing/my-post");
    assert_eq!(nav.settle(seq), ScrollAction::Top);

    // Coming back restores the remembered offset.
    let prior = nav_host_back(&mut nav);
    let seq = nav.handle_popstate(&prior);
    assert_eq!(nav.settle(seq), ScrollAction::Restored(900));
}

#[test]
fn test_rapid_navigation_supersedes_pending_scroll() {
    let mut nav = navigator();
    let first = nav.navigate("/focus");
    let second = nav.navigate("/contact");

    // The older ticket lost the race and must not move the viewport.
    assert_eq!(nav.settle(first), ScrollAction::Superseded);
    assert_eq!(nav.settle(second), ScrollAction::Top);
}

#[test]
fn test_unregistered_path_falls_back() {
    let mut nav = navigator();
    nav.navigate("/does-not-exist");
    assert_eq!(nav.state().pattern, None);
    assert!(nav.current_match().is_none());

    // The session keeps working afterwards.
    nav.navigate("/contact");
    assert_eq!(nav.state().pattern.as_deref(), Some("/contact"));
}

fn nav_host_back(nav: &mut Navigator<&'static str, FakeBrowser>) -> String {
    nav.host_mut().back()
}

fn nav_host_forward(nav: &mut Navigator<&'static str, FakeBrowser>) -> String {
    nav.host_mut().forward()
}

fn scroll_browser(nav: &mut Navigator<&'static str, FakeBrowser>, offset: u32) {
    nav.host_mut().scroll_y = offset;
}
