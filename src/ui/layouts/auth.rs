//! Layout for sign-in and registration pages.

use leptos::prelude::*;

use super::Site;
use crate::ui::components::{BookOpenIcon, ButtonSize, ButtonVariant, Card, LinkButton};

/// Centered card with the site logo above it.
#[component]
pub fn AuthLayout(
    /// Site-wide values.
    site: Site,
    /// Form content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-background px-4 py-12">
            <a href="/" class="mb-8 flex items-center gap-2 text-xl font-semibold">
                <BookOpenIcon class="h-7 w-7 text-primary" />
                <span>{site.name}</span>
            </a>
            <Card class="w-full max-w-md p-8">
                {children()}
            </Card>
            <LinkButton href="/" variant=ButtonVariant::Ghost size=ButtonSize::Sm class="mt-6">
                "Back to home"
            </LinkButton>
        </div>
    }
}
