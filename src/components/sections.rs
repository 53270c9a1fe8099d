use leptos::prelude::*;

use crate::nav::NAV_LINKS;

/// Placeholder page body with one full-height section per navigation anchor.
#[component]
pub fn Sections() -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <section id=link.target class="min-h-screen flex items-center justify-center px-4">
                    <h2 class="text-4xl font-semibold text-accent">{link.label}</h2>
                </section>
            }
        })
        .collect_view()
}
