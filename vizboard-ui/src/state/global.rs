//! Global Application State
//!
//! Reactive state using Leptos signals. The signals hold inputs only (the
//! snapshot, the selection and the search text); every derived value is
//! recomputed by the `vizboard` pipeline when an input changes.

use leptos::*;
use vizboard::pipeline::{search, DashboardView, FilterOptions, FilterSelection};
use vizboard::record::{Field, Record};

use crate::api;

/// Where the one-shot dataset fetch stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Pending,
    /// Snapshot in place; timestamp in ms since epoch
    Loaded { count: usize, at: i64 },
    /// Fetch failed and was logged; the snapshot stays empty
    Failed,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Full dataset, written once when the fetch completes
    pub records: RwSignal<Vec<Record>>,
    pub status: RwSignal<LoadStatus>,
    /// Dashboard filter selects
    pub selection: RwSignal<FilterSelection>,
    /// Home page title search
    pub query: RwSignal<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        records: create_rw_signal(Vec::new()),
        status: create_rw_signal(LoadStatus::Pending),
        selection: create_rw_signal(FilterSelection::new()),
        query: create_rw_signal(String::new()),
    };

    provide_context(state);
    state
}

/// Fetch the dataset once. Failure is logged to the console and leaves
/// the snapshot empty; nothing is shown to the user and nothing is retried.
pub fn load_dataset(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_records().await {
            Ok(records) => {
                state.status.set(LoadStatus::Loaded {
                    count: records.len(),
                    at: chrono::Utc::now().timestamp_millis(),
                });
                state.records.set(records);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch dataset: {}", e).into());
                state.status.set(LoadStatus::Failed);
            }
        }
    });
}

impl GlobalState {
    pub fn is_loading(&self) -> bool {
        self.status.with(|status| *status == LoadStatus::Pending)
    }

    /// Records whose title matches the search text
    pub fn search_results(&self) -> Vec<Record> {
        let query = self.query.get();
        self.records
            .with(|records| search(records, &query).into_iter().cloned().collect())
    }

    /// Charts for the current selection
    pub fn dashboard_view(&self) -> DashboardView {
        let selection = self.selection.get();
        self.records
            .with(|records| DashboardView::build(records, &selection))
    }

    /// Options of the filter selects, from the unfiltered snapshot
    pub fn filter_options(&self) -> FilterOptions {
        self.records.with(|records| FilterOptions::from_records(records))
    }

    /// Apply the value submitted by a filter select
    pub fn set_filter(&self, field: Field, value: String) {
        self.selection.update(|selection| {
            selection.set(field, Some(value));
        });
    }

    pub fn clear_filters(&self) {
        self.selection.update(|selection| selection.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_status_equality() {
        assert_eq!(LoadStatus::Pending, LoadStatus::Pending);
        assert_ne!(LoadStatus::Failed, LoadStatus::Loaded { count: 0, at: 0 });
    }
}
