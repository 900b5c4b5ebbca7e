use leptos::prelude::*;

#[component]
pub fn NotFound(#[prop(into)] home: String) -> impl IntoView {
    view! {
      <section class="flex flex-col justify-center items-center py-24">
        <h1 class="text-4xl font-bold mb-4">"404"</h1>
        <p class="text-gray-600 mb-6">"This page could not be found."</p>
        <a href=home class="text-blue-500 hover:underline">"Back home"</a>
      </section>
    }
}
