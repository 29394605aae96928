use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d404_recommender_overview::PerformanceSnapshot;
use leptos::prelude::*;

#[component]
pub fn PerformanceTab(snapshot: &'static PerformanceSnapshot) -> impl IntoView {
    let latency = &snapshot.latency;

    view! {
        <section class="tab-content tab-content--performance" data-tab="performance">
            <h2 class="tab-content__heading">{snapshot.heading.as_str()}</h2>

            <div class="metric-panels">
                <div class="metric-panel">
                    <h3 class="metric-panel__title">{snapshot.latency_heading.as_str()}</h3>
                    <MetricRow label="p50" value=latency.p50.as_str() good=true />
                    <MetricRow label="p95" value=latency.p95.as_str() good=true />
                    <MetricRow label="p99" value=latency.p99.as_str() good=true />
                </div>

                <div class="metric-panel">
                    <h3 class="metric-panel__title">{snapshot.health_heading.as_str()}</h3>
                    <MetricRow label="Throughput" value=snapshot.throughput.as_str() good=false />
                    <MetricRow label="Availability" value=snapshot.availability.as_str() good=true />
                    <MetricRow label="Cache Hit Rate" value=snapshot.cache_hit.as_str() good=true />
                </div>
            </div>

            <div class="metric-panel">
                <h3 class="metric-panel__title">{snapshot.business_heading.as_str()}</h3>
                <div class="stat-grid">
                    {snapshot
                        .business_metrics
                        .iter()
                        .map(|metric| view! { <StatCard metric=metric /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Labeled key/value row; `good` highlights the value as within target.
#[component]
fn MetricRow(label: &'static str, value: &'static str, good: bool) -> impl IntoView {
    let value_class = if good {
        "metric-row__value metric-row__value--good"
    } else {
        "metric-row__value"
    };

    view! {
        <div class="metric-row">
            <span class="metric-row__label">{label}":"</span>
            <span class=value_class>{value}</span>
        </div>
    }
}
