//! Home Page
//!
//! Title search over the full dataset, listed as report cards.

use leptos::*;

use super::RecordGrid;
use crate::state::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let results = create_memo(move |_| state.search_results());

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Company Data"</h1>
                    <p class="text-gray-500 mt-1">
                        {move || format!("{} reports", results.with(|r| r.len()))}
                    </p>
                </div>

                <input
                    type="search"
                    placeholder="Search by title..."
                    class="border border-gray-300 rounded-lg px-4 py-2 w-full md:w-80"
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.query.set(event_target_value(&ev))
                />
            </div>

            <RecordGrid records=results loading=Signal::derive(move || state.is_loading()) />
        </div>
    }
}
