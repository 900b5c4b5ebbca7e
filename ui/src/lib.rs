pub mod app;
pub mod components;
pub mod document;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod site;

pub use crate::app::{Layout, Shell};
pub use crate::document::{APPLE_TOUCH_ICON, Document, render_page};
pub use crate::nav::{NavEntry, NavStyle, PageContext};
pub use crate::routes::Route;
pub use crate::site::{SiteMeta, Skill, SocialKind, SocialLink};

