use folio_router::Params;
use maud::{html, Markup};

use crate::components::timeline;
use crate::content::timeline_entries;
use crate::layout::Shell;

pub fn render(_params: &Params) -> Markup {
    Shell::new("Background")
        .description("Where Jules Arno has worked")
        .active("/background")
        .render(html! {
            header.page-header {
                h1 { "Background" }
                p { "The route so far, most recent first." }
            }
            (timeline(timeline_entries()))
        })
}
