//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;

pub use dashboard::Dashboard;
pub use home::Home;

use leptos::*;
use vizboard::record::Record;

use crate::components::{CardSkeleton, RecordCard};

/// Cards revealed per "Show more" click
const PAGE_SIZE: usize = 24;

/// Grid of record cards, revealed a page at a time
#[component]
fn RecordGrid(
    #[prop(into)] records: Signal<Vec<Record>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let shown = create_rw_signal(PAGE_SIZE);

    // Start over whenever the underlying list changes
    create_effect(move |_| {
        records.with(|_| ());
        shown.set(PAGE_SIZE);
    });

    view! {
        <div>
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    records.with(|records| {
                        if records.is_empty() {
                            view! {
                                <p class="text-gray-500 text-center py-12">"No reports found"</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {records
                                        .iter()
                                        .take(shown.get())
                                        .cloned()
                                        .map(|record| view! { <RecordCard record=record /> })
                                        .collect_view()}
                                </div>
                            }.into_view()
                        }
                    })
                }
            }}

            {move || {
                let total = records.with(|r| r.len());
                (total > shown.get()).then(|| view! {
                    <div class="flex justify-center mt-6">
                        <button
                            on:click=move |_| shown.update(|n| *n += PAGE_SIZE)
                            class="px-6 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium transition-colors"
                        >
                            {format!("Show more ({} of {})", shown.get(), total)}
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
