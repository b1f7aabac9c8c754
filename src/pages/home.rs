//! Home Page
//!
//! Landing page with feature cards and the Wikidata disease directory.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Disease};
use crate::components::{ErrorBanner, ListSkeleton};
use crate::routes;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"MedGraph"</h1>
                <p class="text-gray-400 mt-1">
                    "Explore diseases, drugs and hospitals from open medical knowledge"
                </p>
            </div>

            // Feature cards
            <div class="grid md:grid-cols-3 gap-6">
                <FeatureCard
                    href=routes::CHAT
                    icon="💬"
                    title="Adviser Chat"
                    blurb="Describe symptoms and get possible conditions and medications."
                />
                <FeatureCard
                    href=routes::HOSPITALS
                    icon="🏥"
                    title="Hospitals"
                    blurb="Find hospitals by country with addresses and websites."
                />
                <FeatureCard
                    href=routes::DRUG_DISEASE_GRAPH
                    icon="🕸️"
                    title="Drug-Disease Graph"
                    blurb="See which drugs treat which diseases at a glance."
                />
            </div>

            // Disease directory
            <DiseaseDirectory />
        </div>
    }
}

/// Card linking to one of the feature pages
#[component]
fn FeatureCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors"
        >
            <div class="text-4xl mb-3">{icon}</div>
            <h2 class="text-lg font-semibold mb-1">{title}</h2>
            <p class="text-sm text-gray-400">{blurb}</p>
        </A>
    }
}

/// Disease directory with client-side name filter
#[component]
fn DiseaseDirectory() -> impl IntoView {
    let (diseases, set_diseases) = create_signal(Vec::<Disease>::new());
    let (filter, set_filter) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Load once when the page is constructed
    spawn_local(async move {
        match api::fetch_diseases().await {
            Ok(list) => set_diseases.set(list),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let filtered = create_memo(move |_| {
        let needle = filter.get().to_lowercase();
        diseases.get()
            .into_iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Disease Directory"</h2>
                <input
                    type="text"
                    placeholder="Filter by name..."
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <ErrorBanner error=error />

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=5 /> }.into_view()
                } else if filtered.get().is_empty() {
                    view! {
                        <p class="text-gray-400 py-6 text-center">"No diseases to show."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            {filtered.get().into_iter().map(|disease| view! {
                                <DiseaseCard disease=disease />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Single disease entry
#[component]
fn DiseaseCard(disease: Disease) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <div class="flex items-baseline justify-between">
                <a
                    href=disease.url.clone()
                    target="_blank"
                    class="font-medium capitalize text-primary-400 hover:underline"
                >
                    {disease.name.clone()}
                </a>
                <span class="text-xs text-gray-400">"ICD-10: " {disease.icd10.clone()}</span>
            </div>

            <p class="text-sm text-gray-300 mt-1">{disease.description.clone()}</p>

            {(!disease.symptoms.is_empty()).then(|| view! {
                <p class="text-xs text-gray-400 mt-2">
                    <span class="font-medium">"Symptoms: "</span>
                    {disease.symptoms.join(", ")}
                </p>
            })}

            {(!disease.treatments.is_empty()).then(|| view! {
                <p class="text-xs text-gray-400 mt-1">
                    <span class="font-medium">"Treatments: "</span>
                    {disease.treatments.join(", ")}
                </p>
            })}
        </div>
    }
}
