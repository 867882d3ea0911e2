use leptos::prelude::*;

use crate::ui::components::{LoadingSpinner, Skeleton, SkeletonVariant};

/// Page images shown while a chapter loads.
pub const CHAPTER_PAGE_COUNT: usize = 3;

/// Chapter reader placeholder: title bar and stacked page images.
#[component]
pub fn ChapterLoading() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-3xl space-y-4" aria-busy="true" data-loading="chapter">
            <div class="flex items-center justify-between">
                <Skeleton variant=SkeletonVariant::Text class="h-6 w-56" />
                <LoadingSpinner label="Loading chapter..." />
            </div>
            {(0..CHAPTER_PAGE_COUNT)
                .map(|_| {
                    view! {
                        <div data-skeleton-preset="page">
                            <Skeleton class="aspect-[2/3] w-full rounded-none" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
