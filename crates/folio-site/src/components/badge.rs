use maud::{html, Markup};

/// Small inline label, used for tags and statuses.
pub fn badge(label: &str) -> Markup {
    html! {
        span.badge { (label) }
    }
}
