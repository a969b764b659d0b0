use once_cell::sync::Lazy;

/// A project or service shown on the Focus page.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            name: "Ledgerline",
            tagline: "Billing reconciliation for small SaaS teams",
            description: "Designed and built the ingestion pipeline and the \
                          double-entry core. Boring on purpose: plain Postgres, \
                          plain queues, observable everywhere.",
            tags: &["Rust", "Postgres", "billing"],
            link: Some("https://github.com/julesarno/ledgerline"),
        },
        Project {
            name: "Terrane",
            tagline: "Map tiles without the yak farm",
            description: "A self-hostable tile server with sane defaults. I \
                          maintain the rendering path and the HTTP caching layer.",
            tags: &["Rust", "maps", "caching"],
            link: Some("https://github.com/julesarno/terrane"),
        },
        Project {
            name: "Consulting",
            tagline: "Short, focused engagements",
            description: "I help teams un-stick slow web services: profiling, \
                          load-shedding, and the unglamorous database work. \
                          Two to six weeks, fixed scope.",
            tags: &["performance", "advisory"],
            link: None,
        },
    ]
});

/// All projects, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}
