//! Navigation and its active-state resolution.
//!
//! The current path is always handed in explicitly through [`PageContext`];
//! nothing here reads the browser location or any other global.

use leptos::prelude::*;

use crate::routes::Route;

/// The slice of render context navigation depends on: the path being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    path: String,
}

impl PageContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// One `(label, target path)` pair of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: String,
}

impl NavEntry {
    pub fn new(label: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            path: path.into(),
        }
    }

    /// Entries for every navigable route, in header order.
    pub fn for_routes(trailing_slash: bool) -> Vec<NavEntry> {
        Route::NAV
            .iter()
            .map(|route| NavEntry::new(route.label(), route.path(trailing_slash)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Emphasized,
    Normal,
}

impl NavStyle {
    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Emphasized => "text-xl font-bold",
            NavStyle::Normal => "",
        }
    }

    fn aria_current(self) -> Option<&'static str> {
        match self {
            NavStyle::Emphasized => Some("page"),
            NavStyle::Normal => None,
        }
    }
}

/// Exact string comparison: `/about` and `/about/` are different pages here.
pub fn resolve(page: &PageContext, target: &str) -> NavStyle {
    if page.path() == target {
        NavStyle::Emphasized
    } else {
        NavStyle::Normal
    }
}

/// Index of the entry rendered with emphasis for `page`, if any. Only the first
/// match counts, so at most one entry is ever emphasized.
pub fn active_index(entries: &[NavEntry], page: &PageContext) -> Option<usize> {
    entries
        .iter()
        .position(|entry| resolve(page, &entry.path) == NavStyle::Emphasized)
}

#[component]
pub fn Navigation(
    page: PageContext,
    entries: Vec<NavEntry>,
    #[prop(into)] brand: String,
) -> impl IntoView {
    let active = active_index(&entries, &page);

    let links = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if active == Some(i) {
                NavStyle::Emphasized
            } else {
                NavStyle::Normal
            };
            let class = format!("text-gray-300 hover:text-white {}", style.class())
                .trim_end()
                .to_string();

            view! {
                <li>
                    <a href=entry.path class=class aria-current=style.aria_current()>
                        {entry.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="container mx-auto flex items-center justify-between px-6 py-4">
            <a href="/" class="text-white text-lg font-semibold">{brand}</a>
            <ul class="flex items-center space-x-6">{links}</ul>
        </nav>
    }
}
