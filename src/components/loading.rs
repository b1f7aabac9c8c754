//! Loading Component
//!
//! Spinner and skeleton states shaped like the directory and hospital
//! layouts they stand in for.

use leptos::*;

/// Centered loading spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| view! {
                <span class="text-sm text-gray-400">{text}</span>
            })}
        </div>
    }
}

/// Skeleton rows shaped like disease directory entries: a name line,
/// a description line, and a detail line
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded-lg p-4">
                    <div class="h-4 bg-gray-600 rounded w-1/4 mb-3" />
                    <div class="h-3 bg-gray-600 rounded w-3/4 mb-2" />
                    <div class="h-3 bg-gray-600 rounded w-1/2" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Skeleton cards matching the two-column hospital grid
#[component]
pub fn CardGridSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl p-5">
                    <div class="h-4 bg-gray-700 rounded w-1/2 mb-3" />
                    <div class="h-3 bg-gray-700 rounded w-full mb-2" />
                    <div class="h-3 bg-gray-700 rounded w-2/3 mb-3" />
                    <div class="h-3 bg-gray-700 rounded w-1/4" />
                </div>
            }).collect_view()}
        </div>
    }
}

// DOM-bound tests, run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_host() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn test_list_skeleton_renders_requested_rows() {
        let host = mount_host();
        mount_to(host.clone().dyn_into().unwrap(), || view! { <ListSkeleton count=4 /> });

        let rows = host.first_element_child().unwrap().child_element_count();
        assert_eq!(rows, 4);
    }

    #[wasm_bindgen_test]
    fn test_card_grid_skeleton_renders_requested_cards() {
        let host = mount_host();
        mount_to(host.clone().dyn_into().unwrap(), || view! { <CardGridSkeleton count=6 /> });

        let cards = host.first_element_child().unwrap().child_element_count();
        assert_eq!(cards, 6);
    }
}
