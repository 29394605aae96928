use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    /// Pill badge, e.g. a pipeline stage frequency
    Primary,
    /// Plain tag
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge--primary",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=variant.css_class()>
            {children()}
        </span>
    }
}

/// Row of neutral badges, one per tag, in the given order.
#[component]
pub fn TagList(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags
                .iter()
                .map(|tag| view! { <Badge>{tag.as_str()}</Badge> })
                .collect_view()}
        </div>
    }
}
