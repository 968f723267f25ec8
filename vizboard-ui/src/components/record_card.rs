//! Record Card Component
//!
//! One report from the dataset: headline, its categories and a link out.

use leptos::*;
use vizboard::record::{Field, Record};

/// Categories listed on a card, in display order
const CARD_FIELDS: [Field; 4] = [Field::Sector, Field::Topic, Field::Region, Field::Country];

/// Card for a single record
#[component]
pub fn RecordCard(record: Record) -> impl IntoView {
    let title = record.title_or_empty().to_string();
    let url = record.url.clone();

    view! {
        <div class="bg-white rounded-lg shadow p-4 flex flex-col">
            <h3 class="font-semibold text-gray-900 mb-3 line-clamp-3">{title}</h3>

            <dl class="text-sm space-y-1 flex-1">
                {CARD_FIELDS
                    .iter()
                    .map(|field| {
                        let value = record.field(*field).unwrap_or_default().to_string();
                        view! {
                            <div class="flex">
                                <dt class="w-20 text-gray-500">{field.label()}</dt>
                                <dd class="text-gray-800">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>

            {url.map(|href| view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-4 text-sm font-medium text-blue-600 hover:text-blue-800"
                >
                    "View Report"
                </a>
            })}
        </div>
    }
}
