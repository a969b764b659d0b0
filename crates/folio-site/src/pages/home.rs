use folio_router::Params;
use maud::{html, Markup};

use crate::components::{hero, post_card, project_card};
use crate::content::{posts, projects};
use crate::layout::Shell;

pub fn render(_params: &Params) -> Markup {
    let featured = &projects()[..2.min(projects().len())];
    let recent = &posts()[..2.min(posts().len())];

    Shell::new("Home")
        .description("Jules Arno — independent engineer for backend and data plumbing")
        .active("/")
        .render(html! {
            (hero(
                "Software that stays boring",
                "I build and rescue backend systems: ingestion, billing, maps, \
                 and the unglamorous paths in between.",
                &[("See my focus", "/focus"), ("Read the blog", "/writing")],
            ))

            section.home-section {
                h2 { "Selected work" }
                div.card-grid {
                    @for project in featured {
                        (project_card(project))
                    }
                }
            }

            section.home-section {
                h2 { "Recent writing" }
                div.card-grid {
                    @for post in recent {
                        (post_card(post))
                    }
                }
            }
        })
}
