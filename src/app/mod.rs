use crate::config::EditorConfig;
use crate::editor::MenuEditor;
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(&config)));

    // Leptos CSR needs the `csr` feature; router hooks need a <Router> ancestor.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("") view=MenuEditor />
            </Routes>
        </Router>
    }
}
