//! Filter Bar Component
//!
//! One select per filterable field. Options come from the full snapshot so
//! narrowing one filter never hides the values of another.

use leptos::*;
use vizboard::record::Field;

use crate::state::GlobalState;

/// Filter selects with a reset button
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let options = create_memo(move |_| state.filter_options());

    view! {
        <div class="bg-white rounded-lg shadow p-4 flex flex-wrap items-end gap-4">
            {Field::FILTERABLE
                .iter()
                .map(|field| view! { <FilterSelect field=*field options=options /> })
                .collect_view()}

            <button
                on:click=move |_| state.clear_filters()
                disabled=move || state.selection.with(|s| s.is_empty())
                class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 disabled:opacity-50 transition-colors"
            >
                "Clear Filters"
            </button>
        </div>
    }
}

#[component]
fn FilterSelect(
    field: Field,
    options: Memo<vizboard::pipeline::FilterOptions>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let current = move || {
        state
            .selection
            .with(|s| s.get(field).unwrap_or_default().to_string())
    };

    view! {
        <label class="flex flex-col text-sm min-w-[10rem]">
            <span class="text-gray-500 mb-1">{field.label()}</span>
            <select
                class="border border-gray-300 rounded-lg px-3 py-2 bg-white"
                prop:value=current
                on:change=move |ev| state.set_filter(field, event_target_value(&ev))
            >
                <option value="">{field.all_label()}</option>
                {move || {
                    options.with(|options| {
                        options
                            .get(field)
                            .iter()
                            .map(|value| {
                                let selected = value.clone();
                                view! {
                                    <option
                                        value=value.clone()
                                        selected=move || current() == selected
                                    >
                                        {value.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    })
                }}
            </select>
        </label>
    }
}
