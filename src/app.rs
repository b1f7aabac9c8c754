//! App Root Component
//!
//! Shell component wrapping the router and the routed page outlet.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Nav;
use crate::pages::{Chat, DrugDiseaseGraph, Home, Hospitals};
use crate::routes;

/// Root application component.
///
/// The `<Routes>` block mirrors `routes::ROUTES` exactly. There is no
/// wildcard entry: a path outside the table leaves the outlet empty rather
/// than redirecting or crashing.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=routes::HOME view=Home />
                        <Route path=routes::CHAT view=Chat />
                        <Route path=routes::HOSPITALS view=Hospitals />
                        <Route path=routes::DRUG_DISEASE_GRAPH view=DrugDiseaseGraph />
                    </Routes>
                </main>

                // Footer with the backend endpoint setting
                <Footer />
            </div>
        </Router>
    }
}

/// Footer showing the backend endpoint, with an inline override persisted
/// to local storage.
#[component]
fn Footer() -> impl IntoView {
    let (api_base, set_current) = create_signal(api::get_api_base());
    let (draft, set_draft) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let url = draft.get().trim().to_string();
        if url.is_empty() {
            return;
        }

        api::set_api_base(&url);
        set_current.set(api::get_api_base());
        set_draft.set(String::new());
    };

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-gray-400">
                    "Backend: "
                    <span class="text-gray-300">{move || api_base.get()}</span>
                </span>

                <form on:submit=on_submit class="flex items-center space-x-2">
                    <input
                        type="text"
                        placeholder="Override API URL..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        class="bg-gray-700 rounded px-3 py-1 text-sm w-64
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || draft.get().trim().is_empty()
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                               rounded text-gray-300 transition-colors"
                    >
                        "Save"
                    </button>
                </form>
            </div>
        </footer>
    }
}
