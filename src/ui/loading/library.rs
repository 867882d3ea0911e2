use leptos::prelude::*;

use crate::ui::components::{Skeleton, SkeletonText};

/// Rows in the library list.
pub const LIBRARY_ROW_COUNT: usize = 6;

/// Library placeholder: one row per saved comic with cover, title and progress.
#[component]
pub fn LibraryLoading() -> impl IntoView {
    view! {
        <ul class="space-y-3" aria-busy="true" data-loading="library">
            {(0..LIBRARY_ROW_COUNT)
                .map(|_| {
                    view! {
                        <li class="flex items-center gap-4 rounded-2xl bg-surface p-3" data-skeleton-preset="list-row">
                            <Skeleton class="h-20 w-14 shrink-0 rounded-lg" />
                            <div class="flex-1">
                                <SkeletonText lines=2 />
                            </div>
                            <Skeleton class="h-8 w-20 rounded-xl" />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
