use maud::{html, Markup};

use super::button::{link_button, ButtonStyle};

/// Full-width hero section with a title, tagline, and action links.
pub fn hero(title: &str, tagline: &str, actions: &[(&str, &str)]) -> Markup {
    html! {
        section.hero {
            h1.hero-title { (title) }
            p.hero-tagline { (tagline) }
            @if !actions.is_empty() {
                div.hero-actions {
                    @for (i, (label, href)) in actions.iter().enumerate() {
                        @if i == 0 {
                            (link_button(label, href, ButtonStyle::Primary))
                        } @else {
                            (link_button(label, href, ButtonStyle::Ghost))
                        }
                    }
                }
            }
        }
    }
}
