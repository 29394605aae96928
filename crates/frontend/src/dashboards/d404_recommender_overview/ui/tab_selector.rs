use crate::dashboards::d404_recommender_overview::view_model::RecommenderOverviewVm;
use contracts::dashboards::d404_recommender_overview::TabId;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn TabSelector(vm: RecommenderOverviewVm) -> impl IntoView {
    view! {
        <div class="recommender-overview__tabs" role="tablist">
            <Space>
                {TabId::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Button
                                appearance=move || if vm.is_active(tab) { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| vm.select_tab(tab)
                            >
                                {tab.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Space>
        </div>
    }
}
