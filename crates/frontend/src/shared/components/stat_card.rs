use contracts::dashboards::d404_recommender_overview::{BusinessMetric, Trend};
use leptos::prelude::*;

/// Business-metric tile: a signed percentage above its label.
#[component]
pub fn StatCard(metric: &'static BusinessMetric) -> impl IntoView {
    let trend_class = match metric.trend() {
        Trend::Up => "stat-card__value stat-card__value--up",
        Trend::Down => "stat-card__value stat-card__value--down",
    };

    view! {
        <div class=format!("stat-card stat-card--{}", metric.accent.css_modifier())>
            <div class=trend_class>{metric.value.as_str()}</div>
            <div class="stat-card__label">{metric.label.as_str()}</div>
        </div>
    }
}
