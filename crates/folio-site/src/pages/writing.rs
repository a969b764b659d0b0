use folio_router::Params;
use maud::{html, Markup};

use crate::components::{post_card, post_meta};
use crate::content::post_by_slug;
use crate::content::posts;
use crate::layout::Shell;
use crate::markdown::render_markdown;
use crate::pages::not_found;

/// Writing index: every post, newest first.
pub fn render_index(_params: &Params) -> Markup {
    Shell::new("Writing")
        .description("Notes on backend engineering by Jules Arno")
        .active("/writing")
        .render(html! {
            header.page-header {
                h1 { "Writing" }
                p { "Occasional notes. Mostly about keeping systems simple." }
            }
            div.post-list {
                @for post in posts() {
                    (post_card(post))
                }
            }
        })
}

/// A single post, looked up by the `postId` capture.
///
/// This renderer serves both `/writing/:postId` and the legacy
/// `/blog/:postId` alias. An unknown slug renders the not-found page.
pub fn render_post(params: &Params) -> Markup {
    let post = params
        .get("postId")
        .and_then(|slug| post_by_slug(slug));

    let Some(post) = post else {
        return not_found::render(params);
    };

    Shell::new(post.title)
        .description(post.summary)
        .active("/writing")
        .render(html! {
            article.post {
                header {
                    h1 { (post.title) }
                    (post_meta(post))
                }
                div.post-body {
                    (render_markdown(post.body))
                }
            }
            p.post-backlink {
                a href="/writing" { "← All writing" }
            }
        })
}
