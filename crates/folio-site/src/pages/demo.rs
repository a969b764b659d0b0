// Demo showcase pages
// Not linked from the main nav; they exist to eyeball components in
// isolation at /demo and /demo/:page.

use folio_router::Params;
use maud::{html, Markup};

use crate::components::{badge, card, hero, link_button, post_card, timeline, ButtonStyle};
use crate::content::{posts, timeline_entries};
use crate::layout::Shell;
use crate::pages::not_found;

const SHOWCASES: &[(&str, &str)] = &[
    ("components", "Cards, buttons, badges"),
    ("hero", "Hero section"),
    ("timeline", "Timeline"),
    ("blog", "Blog widgets"),
];

/// Demo index: links to each showcase.
pub fn render_index(_params: &Params) -> Markup {
    Shell::new("Demo").render(html! {
        header.page-header {
            h1 { "Component demos" }
            p { "Showcase pages used while styling the site." }
        }
        ul.demo-list {
            @for (slug, label) in SHOWCASES {
                li { a href={ "/demo/" (slug) } { (label) } }
            }
        }
    })
}

/// A single showcase, selected by the `page` capture.
pub fn render_page(params: &Params) -> Markup {
    let showcase = params.get("page").map(String::as_str);

    let content = match showcase {
        Some("components") => components_showcase(),
        Some("hero") => hero_showcase(),
        Some("timeline") => timeline(timeline_entries()),
        Some("blog") => blog_showcase(),
        _ => return not_found::render(params),
    };

    Shell::new("Demo").render(html! {
        (content)
        p.post-backlink {
            a href="/demo" { "← All demos" }
        }
    })
}

fn components_showcase() -> Markup {
    html! {
        h1 { "Cards, buttons, badges" }
        div.card-grid {
            (card("A plain card", html! { p { "Card body text." } }))
            (card("Badges", html! {
                (badge("Rust")) " " (badge("maps")) " " (badge("billing"))
            }))
        }
        div.hero-actions {
            (link_button("Primary", "#", ButtonStyle::Primary))
            (link_button("Ghost", "#", ButtonStyle::Ghost))
        }
    }
}

fn hero_showcase() -> Markup {
    hero(
        "A hero headline",
        "With a tagline underneath and two action buttons.",
        &[("First action", "#"), ("Second action", "#")],
    )
}

fn blog_showcase() -> Markup {
    html! {
        h1 { "Blog widgets" }
        div.post-list {
            @if let Some(post) = posts().first() {
                (post_card(post))
            }
        }
    }
}
