use folio_router::Params;
use maud::{html, Markup};

use crate::layout::Shell;

pub fn render(_params: &Params) -> Markup {
    Shell::new("Contact")
        .description("How to reach Jules Arno")
        .active("/contact")
        .render(html! {
            header.page-header {
                h1 { "Contact" }
                p { "For engagements, questions, or to tell me a post is wrong." }
            }
            ul.contact-list {
                li {
                    span.contact-label { "Email" }
                    a href="mailto:jules@julesarno.dev" { "jules@julesarno.dev" }
                }
                li {
                    span.contact-label { "Code" }
                    a href="https://github.com/julesarno" { "github.com/julesarno" }
                }
                li {
                    span.contact-label { "Elsewhere" }
                    a href="https://hachyderm.io/@julesarno" { "@julesarno@hachyderm.io" }
                }
            }
            p.contact-note {
                "I answer most mail within two days. No recruiters, please."
            }
        })
}
