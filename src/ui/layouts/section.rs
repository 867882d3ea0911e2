//! Titled section layout with tab navigation.

use leptos::prelude::*;

/// Tab in a [`SectionLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTab {
    pub label: &'static str,
    pub href: &'static str,
}

/// Section heading, optional description, tabs, then content.
#[component]
pub fn SectionLayout(
    /// Section heading.
    title: &'static str,
    /// Line under the heading.
    #[prop(optional)]
    description: Option<&'static str>,
    /// Tabs; none renders no tab bar.
    #[prop(default = &[])]
    tabs: &'static [SectionTab],
    /// `href` of the selected tab.
    #[prop(default = "")]
    active: &'static str,
    /// Section content.
    children: Children,
) -> impl IntoView {
    let tab_bar = (!tabs.is_empty()).then(|| {
        view! {
            <nav class="flex gap-2 border-b border-panelBorder" hx-boost="true">
                {tabs
                    .iter()
                    .map(|tab| {
                        let selected = tab.href == active;
                        let class = if selected {
                            "border-b-2 border-primary px-3 py-2 text-sm font-medium text-textPrimary"
                        } else {
                            "px-3 py-2 text-sm text-textMuted hover:text-textPrimary"
                        };
                        view! {
                            <a href=tab.href class=class aria-selected=selected.to_string()>
                                {tab.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-bold">{title}</h1>
                {description.map(|text| view! { <p class="text-sm text-textMuted">{text}</p> })}
            </div>
            {tab_bar}
            <div>{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: &[SectionTab] = &[
        SectionTab {
            label: "Reading",
            href: "/library",
        },
        SectionTab {
            label: "Bookmarks",
            href: "/library/bookmarks",
        },
    ];

    #[test]
    fn test_tabs_mark_active() {
        let html = view! {
            <SectionLayout title="Library" tabs=TABS active="/library">
                <p>"rows"</p>
            </SectionLayout>
        }
        .to_html();

        assert!(html.contains(">Library</h1>"));
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-selected=\"false\"").count(), 1);
        assert!(html.contains("<p>rows</p>"));
    }

    #[test]
    fn test_without_tabs_or_description() {
        let html = view! {
            <SectionLayout title="History">
                <p>"rows"</p>
            </SectionLayout>
        }
        .to_html();

        assert!(!html.contains("<nav"));
        assert!(!html.contains("text-textMuted\">"));
    }
}
