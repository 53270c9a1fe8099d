use crate::components::{Header, Sections};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

// No CSS smooth scrolling: it would fight the per-frame scroll animation.
const BODY_CLASS: &str = "bg-background text-accent";

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
                <link rel="stylesheet" id="leptos" href="/pkg/folio.css" />
                <link rel="icon" type="image/svg+xml" href="/logo.svg" />
                <Title text="Portfolio" />
            </head>

            <body class=BODY_CLASS>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <Routes fallback=|| "Page not found".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Sections />
        </main>
    }
}
