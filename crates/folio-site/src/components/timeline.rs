use maud::{html, Markup};

use crate::content::TimelineEntry;

/// Vertical timeline for the Background page.
pub fn timeline(entries: &[TimelineEntry]) -> Markup {
    html! {
        ol.timeline {
            @for entry in entries {
                li.timeline-entry {
                    span.timeline-years { (entry.years) }
                    div.timeline-detail {
                        h3 { (entry.role) " · " (entry.org) }
                        p { (entry.summary) }
                    }
                }
            }
        }
    }
}
