use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::models::Column;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::use_board;

#[component]
pub fn KanbanBoard(#[prop(optional)] config: BoardConfig) -> impl IntoView {
    let hook = use_board(config);

    view! {
        <div
            class="kanban-board"
            // Allow dropping anywhere on the board; only columns move cards
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                hook.drag_end.run(());
            }
        >
            {Column::all()
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column hook=hook /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
