use leptos::prelude::*;

const INPUT_CLASS: &str =
    "w-full border border-gray-300 px-3 py-2 rounded focus:outline-none focus:ring focus:border-blue-500";
const LABEL_CLASS: &str = "block text-gray-700 font-semibold mb-2";

/// Contact form. It has no action: submission belongs to whatever form backend
/// the site is eventually wired to.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
      <div class="flex justify-center items-center h-screen bg-gray-100">
        <div class="bg-white p-8 rounded shadow-lg w-96">
          <h1 class="text-2xl font-bold mb-4">"Get in Touch"</h1>
          <p class="text-gray-600 mb-4">"Have a question? Feel free to leave me a message."</p>
          <form>
            <div class="mb-4">
              <label for="name" class=LABEL_CLASS>"Name:"</label>
              <input type="text" id="name" name="name" class=INPUT_CLASS />
            </div>
            <div class="mb-4">
              <label for="email" class=LABEL_CLASS>"Email:"</label>
              <input type="email" id="email" name="email" class=INPUT_CLASS />
            </div>
            <div class="mb-4">
              <label for="message" class=LABEL_CLASS>"Message:"</label>
              <textarea id="message" name="message" rows="4" class=INPUT_CLASS></textarea>
            </div>
            <button
              type="submit"
              class="bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600 focus:outline-none focus:ring focus:border-blue-500"
            >
              "Submit"
            </button>
          </form>
        </div>
      </div>
    }
}
