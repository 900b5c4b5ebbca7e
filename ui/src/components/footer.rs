use leptos::prelude::*;

use crate::nav::NavEntry;
use crate::site::{SiteMeta, SocialLink};

pub fn copyright_line(year: i32, author: &str) -> String {
    format!("© {year} {author}. All rights reserved.")
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="text-gray-300 hover:text-white ml-2"
            aria-label=link.kind.label()
        >
            <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                <path d=link.kind.icon_path() />
            </svg>
        </a>
    }
}

#[component]
pub fn Footer(site: SiteMeta, entries: Vec<NavEntry>, year: i32) -> impl IntoView {
    let copyright = copyright_line(year, &site.author);

    view! {
        <footer class="bg-gray-900 text-white py-8 mt-14">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between">
                <div class="flex items-center mb-4 md:mb-0">
                    <span class="font-bold text-xl">{site.author}</span>
                    <div class="ml-4 flex items-center">
                        {site
                            .social
                            .into_iter()
                            .map(|link| view! { <SocialIcon link /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex items-center space-x-4">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.path class="text-gray-300 hover:text-white">
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="text-center mt-4">
                <p class="text-gray-300 text-sm">{copyright}</p>
            </div>
        </footer>
    }
}
