// Shell layout
// The document frame used across all pages

use maud::{html, Markup, DOCTYPE};

/// Slots for the page shell.
///
/// All slots except `title` are optional.
#[derive(Clone)]
pub struct Shell {
    /// Page title, rendered as `<title>{title} — Jules Arno</title>`.
    pub title: String,

    /// Meta description.
    pub description: Option<String>,

    /// Path of the nav item to mark active, e.g. `/writing`.
    pub active: Option<String>,
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/focus", "Focus"),
    ("/background", "Background"),
    ("/writing", "Writing"),
    ("/contact", "Contact"),
];

impl Shell {
    /// Create a shell with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            active: None,
        }
    }

    /// Builder method to set the meta description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder method to mark a nav item active.
    pub fn active(mut self, path: impl Into<String>) -> Self {
        self.active = Some(path.into());
        self
    }

    /// Wraps page content in the full HTML document.
    pub fn render(&self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    @if let Some(desc) = &self.description {
                        meta name="description" content=(desc);
                    }
                    title { (self.title) " — Jules Arno" }
                    link rel="stylesheet" href="/static/site.css";
                }
                body {
                    (self.nav())
                    main.page {
                        (content)
                    }
                    footer.site-footer {
                        p { "© Jules Arno. Built with Rust and maud." }
                    }
                }
            }
        }
    }

    fn nav(&self) -> Markup {
        html! {
            nav.site-nav {
                a.brand href="/" { "Jules Arno" }
                ul {
                    @for (path, label) in NAV_ITEMS {
                        @if self.active.as_deref() == Some(*path) {
                            li { a.active href=(path) { (label) } }
                        } @else {
                            li { a href=(path) { (label) } }
                        }
                    }
                }
            }
        }
    }
}
