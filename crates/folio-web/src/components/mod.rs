//! Page components.

mod about;
mod app;
mod background;
mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;

pub use app::Portfolio;
