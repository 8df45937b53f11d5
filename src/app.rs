use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <KanbanBoard config=BoardConfig::default() />
        </main>
    }
}
