// Pages
// One module per routed page; every render fn has the `Page` signature
// so the route table can hold them uniformly.

pub mod background;
pub mod contact;
pub mod demo;
pub mod focus;
pub mod home;
pub mod not_found;
pub mod writing;
