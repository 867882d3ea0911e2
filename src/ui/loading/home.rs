use leptos::prelude::*;

use crate::ui::components::{Skeleton, SkeletonCard, SkeletonVariant};

/// Featured comic cards on the home page.
pub const HOME_CARD_COUNT: usize = 8;

/// Home page placeholder: hero banner, section heading, card grid.
#[component]
pub fn HomeLoading() -> impl IntoView {
    view! {
        <div class="space-y-8" aria-busy="true" data-loading="home">
            <Skeleton class="h-48 w-full rounded-3xl md:h-64" />
            <Skeleton variant=SkeletonVariant::Text class="h-6 w-48" />
            <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                {(0..HOME_CARD_COUNT).map(|_| view! { <SkeletonCard /> }).collect_view()}
            </div>
        </div>
    }
}
