//! Root application component.

use leptos::prelude::*;

use crate::components::cursor_trail::CursorTrail;

/// Page shell: the trail overlay on layer 1, page content stacked above it.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <CursorTrail/>
        <main class="festive-page" style="position: relative; z-index: 10;">
            <h1>"Festive Wishes"</h1>
        </main>
    }
}
