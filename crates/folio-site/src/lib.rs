// Folio Site
// Presentational layer: maud components, pages, content, and the route table

pub mod components;
pub mod content;
pub mod layout;
pub mod markdown;
pub mod pages;

use folio_router::{Params, RouteTable};
use maud::Markup;

// Re-export Maud for page code
pub use maud::{html, PreEscaped, DOCTYPE};

/// A page is a render function from captured params to a full document.
pub type Page = fn(&Params) -> Markup;

/// Builds the site's ordered route table.
///
/// Registration order is match order. `/blog/:postId` is the legacy alias
/// for writing posts and shares the writing-post renderer.
pub fn route_table() -> RouteTable<Page> {
    RouteTable::<Page>::new()
        .with_route("/", pages::home::render)
        .with_route("/focus", pages::focus::render)
        .with_route("/background", pages::background::render)
        .with_route("/writing", pages::writing::render_index)
        .with_route("/writing/:postId", pages::writing::render_post)
        .with_route("/blog/:postId", pages::writing::render_post)
        .with_route("/contact", pages::contact::render)
        .with_route("/demo", pages::demo::render_index)
        .with_route("/demo/:page", pages::demo::render_page)
}

/// The fallback page rendered when no route matches.
pub fn fallback_page() -> Page {
    pages::not_found::render
}
