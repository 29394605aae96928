use leptos::prelude::*;

#[component]
pub fn Header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                <p class="header__subtitle">{subtitle}</p>
            </div>
        </header>
    }
}
