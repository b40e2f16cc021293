use crate::routes::AppRoute;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ListPage() -> impl IntoView {
    view! { <PlaceholderPage route=AppRoute::List heading="Questions" /> }
}

#[component]
pub fn AddPage() -> impl IntoView {
    view! { <PlaceholderPage route=AppRoute::Add heading="Add a Question" /> }
}

#[component]
pub fn PlayPage() -> impl IntoView {
    view! { <PlaceholderPage route=AppRoute::Play heading="Play the Quiz" /> }
}

/// Stand-in for pages served by the rest of the application.
#[component]
fn PlaceholderPage(route: AppRoute, heading: &'static str) -> impl IntoView {
    view! {
        <Title text=route.label() />
        <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4">
            <div class="max-w-4xl w-full">
                <h1 class="text-3xl font-bold text-center mb-6 text-gray-800">{heading}</h1>
                <div class="bg-white rounded-lg shadow p-8 border border-gray-200 text-center">
                    <p class="text-xl text-gray-600">{format!("Served at {}", route.path())}</p>
                </div>
            </div>
        </main>
    }
}
