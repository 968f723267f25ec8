//! Dashboard Page
//!
//! Filter selects, the six charts of the filtered subset and its cards.

use leptos::*;
use vizboard::pipeline::{filter, ChartSpec};

use super::RecordGrid;
use crate::components::{ChartCard, ChartSkeleton, FilterBar};
use crate::state::GlobalState;

/// Chart ids in layout order
const CHART_IDS: [&str; 6] = ["country", "sector", "likelihood", "intensity", "region", "topic"];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let view_memo = create_memo(move |_| state.dashboard_view());

    let subset = create_memo(move |_| {
        let selection = state.selection.get();
        state
            .records
            .with(|records| filter(records, &selection).into_iter().cloned().collect::<Vec<_>>())
    });

    let chart = move |id: &'static str| -> Signal<Option<ChartSpec>> {
        Signal::derive(move || view_memo.with(|v| v.chart(id).cloned()))
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Data Visualization Dashboard"</h1>
                <div class="text-sm text-gray-500">
                    {move || view_memo.with(|v| format!("{} of {} records", v.matched, v.total))}
                </div>
            </div>

            <FilterBar />

            <section class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {move || {
                    if state.is_loading() {
                        (0..CHART_IDS.len()).map(|_| view! { <ChartSkeleton /> }).collect_view()
                    } else {
                        CHART_IDS
                            .iter()
                            .map(|id| view! { <ChartCard spec=chart(*id) /> })
                            .collect_view()
                    }
                }}
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">"Matching Reports"</h2>
                <RecordGrid records=subset loading=Signal::derive(move || state.is_loading()) />
            </section>
        </div>
    }
}
