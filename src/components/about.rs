use leptos::*;

use crate::router::use_navigator;

/// About page, loaded on first visit
#[component]
pub fn About() -> impl IntoView {
    let about = use_navigator().about().clone();

    view! {
        <div class="about-page">
            <h2>{about.name}" "{about.version}</h2>
            <p>{about.description}</p>
            <h3>"Views"</h3>
            <ul class="view-list">
                {about
                    .views
                    .into_iter()
                    .map(|(path, title)| view! { <li><code>{path}</code>" "{title}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
