use crate::shared::components::ui::TagList;
use crate::shared::icons::icon;
use contracts::dashboards::d404_recommender_overview::{ArchitectureComponent, ArchitectureSection};
use leptos::prelude::*;

#[component]
pub fn ArchitectureTab(section: &'static ArchitectureSection) -> impl IntoView {
    view! {
        <section class="tab-content tab-content--architecture" data-tab="architecture">
            <h2 class="tab-content__heading">{section.heading.as_str()}</h2>
            <div class="component-grid">
                {section
                    .components
                    .iter()
                    .map(|component| view! { <ComponentCard component=component /> })
                    .collect_view()}
            </div>

            <div class="callout callout--info">
                <h3 class="callout__title">
                    {icon("alert-circle")}
                    {section.design_decisions_heading.as_str()}
                </h3>
                <ul class="callout__list">
                    {section
                        .design_decisions
                        .iter()
                        .map(|decision| {
                            view! {
                                <li>
                                    "• "
                                    <strong>{decision.title.as_str()}":"</strong>
                                    " "
                                    {decision.detail.as_str()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn ComponentCard(component: &'static ArchitectureComponent) -> impl IntoView {
    // critical / important
    let icon_class = format!(
        "component-card__icon component-card__icon--{}",
        component.status.css_modifier()
    );

    view! {
        <div class="component-card">
            <div class=icon_class>{icon(&component.icon)}</div>
            <div class="component-card__body">
                <h3 class="component-card__name">{component.name.as_str()}</h3>
                <p class="component-card__description">{component.description.as_str()}</p>
                <TagList tags=component.tech.as_slice() />
            </div>
        </div>
    }
}
