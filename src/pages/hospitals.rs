//! Hospitals Page
//!
//! Hospital directory for a selectable country, backed by Wikidata.

use leptos::*;

use crate::api::{self, Hospital};
use crate::components::{CardGridSkeleton, ErrorBanner};

/// Default country filter (Ukraine)
pub const DEFAULT_COUNTRY: &str = "Q212";

/// Countries offered in the selector, as Wikidata QIDs
const COUNTRIES: [(&str, &str); 6] = [
    ("Q212", "Ukraine"),
    ("Q36", "Poland"),
    ("Q183", "Germany"),
    ("Q142", "France"),
    ("Q145", "United Kingdom"),
    ("Q30", "United States"),
];

/// Hospitals page component
#[component]
pub fn Hospitals() -> impl IntoView {
    let (hospitals, set_hospitals) = create_signal(Vec::<Hospital>::new());
    let (country, set_country) = create_signal(DEFAULT_COUNTRY.to_string());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let load = move |qid: String| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_hospitals(&qid).await {
                Ok(list) => set_hospitals.set(list),
                Err(e) => {
                    set_hospitals.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Initial fetch for the default country
    load(DEFAULT_COUNTRY.to_string());

    let on_country_change = move |ev: web_sys::Event| {
        let qid = event_target_value(&ev);
        set_country.set(qid.clone());
        load(qid);
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-end justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Hospitals"</h1>
                    <p class="text-gray-400 mt-1">"Hospitals with known locations, by country"</p>
                </div>

                // Country selector
                <select
                    on:change=on_country_change
                    class="bg-gray-700 rounded px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {COUNTRIES.into_iter().map(|(qid, name)| view! {
                        <option value=qid selected=move || country.get() == qid>
                            {name}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <ErrorBanner error=error />

            {move || {
                if loading.get() {
                    view! { <CardGridSkeleton count=6 /> }.into_view()
                } else if hospitals.get().is_empty() {
                    view! {
                        <p class="text-gray-400 py-10 text-center">
                            "No hospitals found for this country."
                        </p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            {hospitals.get().into_iter().map(|hospital| view! {
                                <HospitalCard hospital=hospital />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Single hospital entry
#[component]
fn HospitalCard(hospital: Hospital) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-5 space-y-2">
            <div class="flex items-start justify-between">
                <h2 class="font-semibold">{hospital.name.clone()}</h2>
                <a
                    href=hospital.wikidata_url.clone()
                    target="_blank"
                    class="text-xs text-gray-400 hover:text-white shrink-0 ml-2"
                >
                    "Wikidata ↗"
                </a>
            </div>

            <p class="text-sm text-gray-300">{hospital.description.clone()}</p>
            <p class="text-sm text-gray-400">{hospital.address.clone()}</p>

            <div class="flex items-center space-x-4 text-sm">
                {hospital.website.clone().map(|url| view! {
                    <a href=url target="_blank" class="text-primary-400 hover:underline">
                        "Website"
                    </a>
                })}
                {hospital.image.clone().map(|url| view! {
                    <a href=url target="_blank" class="text-primary-400 hover:underline">
                        "Photo"
                    </a>
                })}
            </div>
        </div>
    }
}
