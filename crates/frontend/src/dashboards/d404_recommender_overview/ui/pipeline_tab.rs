use crate::shared::components::ui::{Badge, BadgeVariant, TagList};
use contracts::dashboards::d404_recommender_overview::{PipelineSection, PipelineStage};
use leptos::prelude::*;

#[component]
pub fn PipelineTab(section: &'static PipelineSection) -> impl IntoView {
    view! {
        <section class="tab-content tab-content--pipeline" data-tab="pipeline">
            <h2 class="tab-content__heading">{section.heading.as_str()}</h2>
            <div class="stage-list">
                {section
                    .stages
                    .iter()
                    .map(|stage| view! { <StageCard stage=stage /> })
                    .collect_view()}
            </div>

            <div class="callout callout--success">
                <h3 class="callout__title">{section.schedule_heading.as_str()}</h3>
                <div class="callout__rows">
                    {section
                        .schedule
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="callout__row">
                                    <span>{entry.label.as_str()}":"</span>
                                    <span class="callout__value">{entry.value.as_str()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StageCard(stage: &'static PipelineStage) -> impl IntoView {
    view! {
        <div class="stage-card">
            <div class="stage-card__header">
                <div>
                    <h3 class="stage-card__name">{stage.stage.as_str()}</h3>
                    <p class="stage-card__description">{stage.description.as_str()}</p>
                </div>
                <Badge variant=BadgeVariant::Primary>{stage.frequency.as_str()}</Badge>
            </div>
            <TagList tags=stage.metrics.as_slice() />
        </div>
    }
}
