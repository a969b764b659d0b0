use folio_router::Params;
use maud::{html, Markup};

use crate::components::project_card;
use crate::content::projects;
use crate::layout::Shell;

pub fn render(_params: &Params) -> Markup {
    Shell::new("Focus")
        .description("What Jules Arno is working on")
        .active("/focus")
        .render(html! {
            header.page-header {
                h1 { "Focus" }
                p { "Current projects and the kind of engagements I take." }
            }
            div.card-grid {
                @for project in projects() {
                    (project_card(project))
                }
            }
        })
}
