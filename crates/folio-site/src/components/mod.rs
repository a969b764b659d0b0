// Presentational components
// Small maud render functions shared across pages.

pub mod badge;
pub mod blog;
pub mod button;
pub mod card;
pub mod hero;
pub mod timeline;

pub use badge::badge;
pub use blog::{post_card, post_meta};
pub use button::{link_button, ButtonStyle};
pub use card::{card, project_card};
pub use hero::hero;
pub use timeline::timeline;
