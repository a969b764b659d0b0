use once_cell::sync::Lazy;

/// One entry on the Background page timeline.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub years: &'static str,
    pub role: &'static str,
    pub org: &'static str,
    pub summary: &'static str,
}

static ENTRIES: Lazy<Vec<TimelineEntry>> = Lazy::new(|| {
    vec![
        TimelineEntry {
            years: "2023 — now",
            role: "Independent engineer",
            org: "julesarno.dev",
            summary: "Contract work on backend performance and data plumbing, \
                      plus the open-source projects on the Focus page.",
        },
        TimelineEntry {
            years: "2019 — 2023",
            role: "Staff engineer",
            org: "Fernwood Systems",
            summary: "Owned the ingest tier of a telemetry product: protocol \
                      endpoints, backpressure, and the on-call rotation that \
                      taught me to keep things simple.",
        },
        TimelineEntry {
            years: "2015 — 2019",
            role: "Backend engineer",
            org: "Cartel Maps",
            summary: "Tile rendering and routing APIs. First production Rust, \
                      shipped behind a nervous C++ fallback that we deleted a \
                      year later.",
        },
        TimelineEntry {
            years: "2011 — 2015",
            role: "B.Sc. Computer Science",
            org: "University of Gothenburg",
            summary: "Thesis on incremental view maintenance. Mostly I learned \
                      to read papers and to distrust benchmarks.",
        },
    ]
});

/// Timeline entries, most recent first.
pub fn timeline_entries() -> &'static [TimelineEntry] {
    &ENTRIES
}
