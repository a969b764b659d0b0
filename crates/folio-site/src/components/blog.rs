// Blog display widgets

use maud::{html, Markup};

use crate::content::Post;

/// Date + summary line shown under a post title.
pub fn post_meta(post: &Post) -> Markup {
    html! {
        p.post-meta {
            time datetime=(post.date) { (post.display_date()) }
        }
    }
}

/// Card linking to a post from the Writing index.
pub fn post_card(post: &Post) -> Markup {
    html! {
        article.post-card {
            h3 { a href={ "/writing/" (post.slug) } { (post.title) } }
            (post_meta(post))
            p { (post.summary) }
        }
    }
}
