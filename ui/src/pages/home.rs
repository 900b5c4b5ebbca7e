use leptos::prelude::*;

use crate::app::Shell;
use crate::routes::Route;

#[component]
pub fn HomePage(shell: Shell) -> impl IntoView {
    let about = Route::About.path(shell.trailing_slash);
    let contact = Route::Contact.path(shell.trailing_slash);
    let avatar = shell.site.avatar.clone().map(|src| {
        let alt = shell.site.author.clone();
        view! { <img src=src alt=alt class="h-32 w-32 rounded-full mb-6 object-cover"/> }
    });

    view! {
      <section class="h-full flex items-center justify-center bg-gray-100 py-24">
        <div class="mx-4 p-10 rounded shadow-lg bg-white max-w-lg w-full">
          {avatar}
          <h1 class="text-4xl font-bold mb-2">"Hi, I'm " {shell.site.author}</h1>
          <p class="mb-6 text-lg text-gray-600">{shell.site.tagline}</p>

          <div class="flex gap-3">
            <a href=about class="px-6 py-3 rounded bg-blue-500 hover:bg-blue-600 text-white font-medium">"About me"</a>
            <a href=contact class="px-6 py-3 rounded border border-gray-300 hover:bg-gray-50">"Get in touch"</a>
          </div>
        </div>
      </section>
    }
}
