use maud::{html, Markup};

/// Visual style of a link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Ghost,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Ghost => "btn btn-ghost",
        }
    }
}

/// An anchor styled as a button.
pub fn link_button(label: &str, href: &str, style: ButtonStyle) -> Markup {
    html! {
        a class=(style.class()) href=(href) { (label) }
    }
}
