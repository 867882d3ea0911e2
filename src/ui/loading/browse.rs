use leptos::prelude::*;

use crate::ui::components::{Skeleton, SkeletonComicCard};

/// Comic covers in the browse grid.
pub const BROWSE_GRID_COUNT: usize = 12;

/// Browse page placeholder: filter bar and cover grid.
#[component]
pub fn BrowseLoading() -> impl IntoView {
    view! {
        <div class="space-y-6" aria-busy="true" data-loading="browse">
            <div class="flex flex-wrap gap-2">
                <Skeleton class="h-10 w-64 rounded-xl" />
                <Skeleton class="h-10 w-28 rounded-xl" />
                <Skeleton class="h-10 w-28 rounded-xl" />
            </div>
            <div class="grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6">
                {(0..BROWSE_GRID_COUNT).map(|_| view! { <SkeletonComicCard /> }).collect_view()}
            </div>
        </div>
    }
}
