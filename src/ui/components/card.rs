//! Card container.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="p-8">
///         <h3>"Sign in"</h3>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("rounded-3xl bg-surface text-textPrimary shadow-lg {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
