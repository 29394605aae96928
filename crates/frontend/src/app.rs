use crate::dashboards::RecommenderOverviewDashboard;
use contracts::dashboards::d404_recommender_overview::DashboardContent;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App(content: &'static DashboardContent) -> impl IntoView {
    // Static dashboard content for every page below.
    provide_context(content);

    view! {
        <ConfigProvider>
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=RecommenderOverviewDashboard />
                </Routes>
            </Router>
        </ConfigProvider>
    }
}
