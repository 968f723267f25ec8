//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Nav;
use crate::pages::{Dashboard, Home};
use crate::state::{load_dataset, provide_global_state, GlobalState, LoadStatus};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // One fetch per page load, shared by both pages
    load_dataset(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing the dataset status
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let source = api::get_data_url();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500">
                <div class="truncate max-w-md" title=source.clone()>{source}</div>

                <div>
                    {move || match state.status.get() {
                        LoadStatus::Pending => view! {
                            <span class="flex items-center space-x-2 text-blue-500">
                                <span class="inline-block loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </span>
                        }.into_view(),
                        LoadStatus::Loaded { count, at } => {
                            let time = chrono::DateTime::from_timestamp_millis(at)
                                .map(|dt| dt.format("%H:%M:%S").to_string())
                                .unwrap_or_default();
                            view! {
                                <span>{format!("{} records, loaded {}", count, time)}</span>
                            }.into_view()
                        }
                        // Details are in the console
                        LoadStatus::Failed => view! { <span>"0 records"</span> }.into_view(),
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
