//! Skeleton placeholders shown while real content loads.
//!
//! [`Skeleton`] is the primitive shape. The presets compose it into the
//! blocks used by the route loading screens:
//!
//! - [`SkeletonAvatar`]: circular, fixed size
//! - [`SkeletonText`]: `lines` stacked text bars, the last one narrower
//! - [`SkeletonCard`]: image placeholder plus two text lines
//! - [`SkeletonComicCard`]: cover-shaped image plus two text lines

use leptos::prelude::*;

use super::style::{StyleKey, join_classes, style_table};

/// Classes every skeleton carries.
pub const SKELETON_BASE_CLASSES: &str = "animate-pulse bg-surfaceVariant";

/// Width applied to every text line except the last.
pub const TEXT_LINE_FULL_WIDTH: &str = "w-full";

/// Width applied to the last line of a [`SkeletonText`] block.
pub const TEXT_LINE_SHORT_WIDTH: &str = "w-4/5";

/// Skeleton shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkeletonVariant {
    /// Rounded rectangle (images, cards).
    #[default]
    Rectangular,
    /// Circle (avatars, icons).
    Circular,
    /// Single line of text.
    Text,
}

style_table!(SkeletonVariant, "skeleton", {
    Rectangular => ("rectangular", "rounded-md"),
    Circular => ("circular", "rounded-full"),
    Text => ("text", "h-4 rounded"),
});

fn dimension_style(width: Option<&str>, height: Option<&str>) -> Option<String> {
    let mut style = String::new();
    if let Some(width) = width {
        style.push_str(&format!("width: {width};"));
    }
    if let Some(height) = height {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("height: {height};"));
    }
    (!style.is_empty()).then_some(style)
}

/// Primitive skeleton shape.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Skeleton variant=SkeletonVariant::Circular width="48px" height="48px" />
///     <Skeleton variant="text" class="w-2/3" />
/// }
/// ```
#[component]
pub fn Skeleton(
    /// Shape of the placeholder.
    #[prop(into, default = StyleKey::Known(SkeletonVariant::Rectangular))]
    variant: StyleKey<SkeletonVariant>,
    /// Explicit CSS width (e.g. `"120px"`, `"50%"`).
    #[prop(optional, into)]
    width: Option<String>,
    /// Explicit CSS height.
    #[prop(optional, into)]
    height: Option<String>,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = join_classes(&[SKELETON_BASE_CLASSES, variant.classes(), &class]);
    let style = dimension_style(width.as_deref(), height.as_deref());
    let shape = variant.known().map(SkeletonVariant::name);

    view! {
        <div class=classes style=style data-skeleton=shape aria-hidden="true" />
    }
}

/// Circular avatar placeholder.
#[component]
pub fn SkeletonAvatar(
    /// Diameter as a CSS length.
    #[prop(into, default = "40px".to_string())]
    size: String,
) -> impl IntoView {
    view! {
        <div data-skeleton-preset="avatar" class="shrink-0">
            <Skeleton variant=SkeletonVariant::Circular width=size.clone() height=size />
        </div>
    }
}

/// Stack of text-line placeholders.
///
/// Renders exactly `lines` bars; only the last uses the narrower width.
#[component]
pub fn SkeletonText(
    /// Number of lines.
    #[prop(default = 3)]
    lines: usize,
    /// Additional CSS classes for the wrapper.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = join_classes(&["space-y-2", class]);

    view! {
        <div class=classes data-skeleton-preset="text">
            {(0..lines)
                .map(|line| {
                    let width = if line + 1 == lines {
                        TEXT_LINE_SHORT_WIDTH
                    } else {
                        TEXT_LINE_FULL_WIDTH
                    };
                    view! { <Skeleton variant=SkeletonVariant::Text class=width /> }
                })
                .collect_view()}
        </div>
    }
}

/// Generic card placeholder: image plus two text lines.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="rounded-2xl bg-surface p-4 space-y-3" data-skeleton-preset="card">
            <Skeleton class="h-40 w-full" />
            <Skeleton variant=SkeletonVariant::Text class="w-3/4" />
            <Skeleton variant=SkeletonVariant::Text class="w-1/2" />
        </div>
    }
}

/// Comic card placeholder: cover image plus title and meta lines.
#[component]
pub fn SkeletonComicCard() -> impl IntoView {
    view! {
        <div class="space-y-2" data-skeleton-preset="comic-card">
            <Skeleton class="aspect-[2/3] w-full rounded-xl" />
            <Skeleton variant=SkeletonVariant::Text class="w-5/6" />
            <Skeleton variant=SkeletonVariant::Text class="h-3 w-1/2" />
        </div>
    }
}
