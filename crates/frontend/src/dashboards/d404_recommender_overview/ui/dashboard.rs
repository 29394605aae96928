use super::architecture_tab::ArchitectureTab;
use super::performance_tab::PerformanceTab;
use super::pipeline_tab::PipelineTab;
use super::tab_selector::TabSelector;
use crate::dashboards::d404_recommender_overview::view_model::{ActiveBlock, RecommenderOverviewVm};
use crate::layout::{Footer, Header};
use contracts::dashboards::d404_recommender_overview::DashboardContent;
use leptos::prelude::*;

/// Recommender system overview: architecture, ML pipeline and performance tabs.
///
/// Content comes from the `&'static DashboardContent` context; the only state
/// is the active tab held by [`RecommenderOverviewVm`].
#[component]
pub fn RecommenderOverviewDashboard() -> impl IntoView {
    let content = leptos::context::use_context::<&'static DashboardContent>()
        .expect("DashboardContent context not found");
    let vm = RecommenderOverviewVm::new(content);

    view! {
        <div class="recommender-overview">
            <div class="recommender-overview__card">
                <Header
                    title=content.header.title.as_str()
                    subtitle=content.header.subtitle.as_str()
                />
                <TabSelector vm=vm />
                <div class="recommender-overview__body">
                    {move || match vm.active_block() {
                        ActiveBlock::Architecture(section) => {
                            view! { <ArchitectureTab section=section /> }.into_any()
                        }
                        ActiveBlock::Pipeline(section) => {
                            view! { <PipelineTab section=section /> }.into_any()
                        }
                        ActiveBlock::Performance(snapshot) => {
                            view! { <PerformanceTab snapshot=snapshot /> }.into_any()
                        }
                    }}
                </div>
            </div>
            <Footer text=content.footer.as_str() />
        </div>
    }
}
