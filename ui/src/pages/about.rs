use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::site::SiteMeta;

#[component]
pub fn AboutPage(site: SiteMeta) -> impl IntoView {
    let skills = site
        .skills
        .into_iter()
        .map(|skill| view! { <ProgressBar color=skill.color label=skill.label value=skill.value /> })
        .collect_view();

    view! {
      <section class="container mx-auto px-6 py-16">
        <h1 class="text-3xl font-bold mb-4">"About " {site.author}</h1>
        <p class="text-gray-600 leading-relaxed max-w-2xl">{site.tagline}</p>

        <h2 class="text-2xl font-semibold mt-10">"Skills"</h2>
        <div class="flex flex-col">{skills}</div>
      </section>
    }
}
