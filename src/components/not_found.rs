use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="no-data">
            <h2>"Page not found"</h2>
            <p>"Nothing lives at " <code>{move || pathname.get()}</code></p>
            <A href="/">"Back to start"</A>
        </div>
    }
}
