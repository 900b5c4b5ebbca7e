// ui/src/routes.rs
use std::path::PathBuf;

use leptos::prelude::*;

use crate::app::Shell;
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFound};

/// The fixed page table. No parameters, no dynamic segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Contact,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Contact, Route::NotFound];

    /// Routes that get a header entry, in header order.
    pub const NAV: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    fn segment(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::About => "about",
            Route::Contact => "contact",
            Route::NotFound => "404",
        }
    }

    pub fn path(self, trailing_slash: bool) -> String {
        match (self.segment(), trailing_slash) {
            ("", _) => "/".to_string(),
            (segment, true) => format!("/{segment}/"),
            (segment, false) => format!("/{segment}"),
        }
    }

    /// Exact lookup among the navigable routes; anything else is `NotFound`.
    pub fn from_path(path: &str, trailing_slash: bool) -> Route {
        Route::NAV
            .into_iter()
            .find(|route| route.path(trailing_slash) == path)
            .unwrap_or(Route::NotFound)
    }

    /// File the page is written to, relative to the export root.
    pub fn export_file(self, trailing_slash: bool) -> PathBuf {
        match (self, trailing_slash) {
            (Route::Home, _) => PathBuf::from("index.html"),
            (Route::NotFound, _) => PathBuf::from("404.html"),
            (route, true) => PathBuf::from(route.segment()).join("index.html"),
            (route, false) => PathBuf::from(format!("{}.html", route.segment())),
        }
    }

    pub fn title(self, site_title: &str) -> String {
        format!("{} | {}", self.label(), site_title)
    }

    /// Content region of the page; header and footer come from the layout.
    pub fn view(self, shell: &Shell) -> AnyView {
        match self {
            Route::Home => view! { <HomePage shell=shell.clone() /> }.into_any(),
            Route::About => view! { <AboutPage site=shell.site.clone() /> }.into_any(),
            Route::Contact => view! { <ContactPage /> }.into_any(),
            Route::NotFound => view! { <NotFound home=Route::Home.path(shell.trailing_slash) /> }.into_any(),
        }
    }
}
