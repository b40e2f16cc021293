use crate::components::{Header, header::TITLE};
use crate::navigation::NavigatorHandle;
use crate::pages::{AddPage, ListPage, PlayPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/output.css" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <Title formatter=|text| format!("{} - {}", text, TITLE) text="List" />
            </head>

            <body class="bg-gray-50">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    if use_context::<NavigatorHandle>().is_none() {
        provide_context(NavigatorHandle::default());
    }

    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <Header />
                <Routes fallback=|| "Page not found".into_view()>
                    <Route path=path!("/") view=ListPage />
                    <Route path=path!("/add") view=AddPage />
                    <Route path=path!("/play") view=PlayPage />
                </Routes>
            </div>
        </Router>
    }
}
