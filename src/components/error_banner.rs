//! Error Banner Component
//!
//! Inline error display for failed fetches. Each page owns its own error
//! signal; there is no global toast.

use leptos::*;

/// Banner shown when a page-level request fails
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = error.get() {
                view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3">
                        <span class="font-medium">"Error: "</span>
                        {message}
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
