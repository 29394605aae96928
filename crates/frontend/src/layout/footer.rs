use leptos::prelude::*;

#[component]
pub fn Footer(text: &'static str) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar">
            <p>{text}</p>
        </footer>
    }
}
