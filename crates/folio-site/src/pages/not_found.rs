use folio_router::Params;
use maud::{html, Markup};

use crate::layout::Shell;

/// Fallback page for unmatched paths and unknown slugs.
pub fn render(_params: &Params) -> Markup {
    Shell::new("Not found").render(html! {
        section.not-found {
            h1 { "Nothing here" }
            p { "That page does not exist, or it moved without telling me." }
            p { a href="/" { "Back to the start" } }
        }
    })
}
