#![cfg(target_arch = "wasm32")]

use contracts::dashboards::d404_recommender_overview::DashboardContent;
use frontend::dashboards::RecommenderOverviewDashboard;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::ConfigProvider;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_dashboard() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();

    let content = DashboardContent::embedded().unwrap();
    leptos::mount::mount_to(container.clone(), move || {
        provide_context(content);
        view! {
            <ConfigProvider>
                <RecommenderOverviewDashboard />
            </ConfigProvider>
        }
    })
    .forget();

    container
}

fn texts(root: &HtmlElement, selector: &str) -> Vec<String> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default().trim().to_string())
        .collect()
}

fn has(root: &HtmlElement, selector: &str) -> bool {
    root.query_selector(selector).unwrap().is_some()
}

fn tab_button(root: &HtmlElement, label: &str) -> HtmlElement {
    let buttons = root.query_selector_all(".recommender-overview__tabs button").unwrap();
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .find(|node| node.text_content().unwrap_or_default().trim() == label)
        .map(|node| node.unchecked_into())
        .unwrap()
}

#[wasm_bindgen_test]
fn initial_render_shows_architecture_only() {
    let root = mount_dashboard();

    assert!(has(&root, "[data-tab=architecture]"));
    assert!(!has(&root, "[data-tab=pipeline]"));
    assert!(!has(&root, "[data-tab=performance]"));

    assert_eq!(
        texts(&root, ".component-card__name"),
        vec!["Data Ingestion Layer", "Feature Store", "Model Serving", "Caching Layer"]
    );

    let first_card: HtmlElement = root
        .query_selector(".component-card")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(
        texts(&first_card, ".badge"),
        vec!["Apache Kafka", "AWS Kinesis", "Redis"]
    );
}

#[wasm_bindgen_test]
fn status_marks_critical_and_important_differently() {
    let root = mount_dashboard();

    let critical = root
        .query_selector_all(".component-card__icon--critical")
        .unwrap()
        .length();
    let important = root
        .query_selector_all(".component-card__icon--important")
        .unwrap()
        .length();
    assert_eq!((critical, important), (3, 1));
}

#[wasm_bindgen_test]
fn selector_lists_tabs_in_order() {
    let root = mount_dashboard();

    assert_eq!(
        texts(&root, ".recommender-overview__tabs button"),
        vec!["Architecture", "Pipeline", "Performance"]
    );
}

#[wasm_bindgen_test]
async fn selecting_a_tab_swaps_the_block() {
    let root = mount_dashboard();

    tab_button(&root, "Pipeline").click();
    TimeoutFuture::new(0).await;
    assert!(has(&root, "[data-tab=pipeline]"));
    assert!(!has(&root, "[data-tab=architecture]"));
    assert!(!has(&root, "[data-tab=performance]"));
    assert_eq!(
        texts(&root, ".stage-card__name"),
        vec!["Batch Training", "Online Learning", "A/B Testing", "Model Monitoring"]
    );

    tab_button(&root, "Performance").click();
    TimeoutFuture::new(0).await;
    assert!(has(&root, "[data-tab=performance]"));
    assert!(!has(&root, "[data-tab=pipeline]"));
    assert_eq!(
        texts(&root, ".stat-card__value"),
        vec!["+23%", "+18%", "+31%", "-12%"]
    );

    let body = |root: &HtmlElement| {
        root.query_selector(".recommender-overview__body")
            .unwrap()
            .unwrap()
            .inner_html()
    };
    let before = body(&root);
    tab_button(&root, "Performance").click();
    TimeoutFuture::new(0).await;
    assert_eq!(body(&root), before);
}
