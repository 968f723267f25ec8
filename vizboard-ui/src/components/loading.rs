//! Loading Component
//!
//! Skeleton states shown while the dataset fetch is pending.

use leptos::*;

/// Skeleton loader for record cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4 animate-pulse">
            <div class="h-5 bg-gray-200 rounded w-3/4 mb-4" />
            <div class="h-4 bg-gray-200 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-200 rounded w-1/3" />
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 animate-pulse">
            <div class="h-6 bg-gray-200 rounded w-1/3 mb-4" />
            <div class="h-64 bg-gray-200 rounded" />
        </div>
    }
}
