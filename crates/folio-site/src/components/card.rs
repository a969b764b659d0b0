use maud::{html, Markup};

use super::badge::badge;
use crate::content::Project;

/// Generic content card.
pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        article.card {
            h3.card-title { (title) }
            div.card-body { (body) }
        }
    }
}

/// Card for a Focus-page project, with tags and an optional link.
pub fn project_card(project: &Project) -> Markup {
    card(
        project.name,
        html! {
            p.card-tagline { (project.tagline) }
            p { (project.description) }
            div.card-tags {
                @for tag in project.tags {
                    (badge(tag))
                }
            }
            @if let Some(link) = project.link {
                a.card-link href=(link) { "Project page" }
            }
        },
    )
}
