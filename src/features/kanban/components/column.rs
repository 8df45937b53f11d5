use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use crate::core::models::{CardRecord, Column};
use crate::features::kanban::components::{Card, NewCardEntry};
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::HoverTarget;

#[component]
pub fn KanbanColumn(column: Column, hook: BoardHook) -> impl IntoView {
    let board = hook.board;
    let column_ref: NodeRef<Div> = NodeRef::new();

    // Drag-over on the cards container, or on the bare column around it,
    // appends the dragged card to the end of this column.
    let append_dragged = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        hook.drag_over.run((column, None));
    };

    let handle_column_drag_over = move |ev: leptos::ev::DragEvent| {
        let on_bare_column = ev.target().map(JsValue::from)
            == column_ref.get_untracked().map(JsValue::from);
        if on_bare_column {
            append_dragged(ev);
        }
    };

    let on_drag_over = Callback::new(move |hover: HoverTarget| hook.drag_over.run((column, Some(hover))));
    let on_confirm = Callback::new(move |text: String| hook.confirm_entry.run((column, text)));
    let on_cancel = Callback::new(move |_: ()| hook.cancel_entry.run(column));

    view! {
        <div
            node_ref=column_ref
            class="column"
            data-name=column.as_str()
            on:dragover=handle_column_drag_over
        >
            <div class="column-header">
                <h3>{column.as_str()}</h3>
                // Reactive card count
                <span class="card-count">
                    {move || board.with(|b| b.state().cards(column).len())}
                </span>
            </div>
            <button class="add-card" on:click=move |_| hook.open_entry.run(column)>
                "Add another card"
            </button>
            <div class="cards-container" on:dragover=append_dragged>
                // Keyed so a reorder inside the column moves the existing
                // element instead of rebuilding it mid-drag
                <For
                    each=move || board.with(|b| b.state().cards(column).to_vec())
                    key=|card| card.id.clone()
                    children=move |card: CardRecord| {
                        let card_id = card.id.clone();
                        let dragging = Signal::derive(move || {
                            board.with(|b| b.dragging() == Some(card_id.as_str()))
                        });
                        view! {
                            <Card
                                card=card
                                dragging=dragging
                                on_delete=hook.delete_card
                                on_drag_start=hook.drag_start
                                on_drag_over=on_drag_over
                                on_drag_end=hook.drag_end
                            />
                        }
                    }
                />
            </div>
            <Show when=move || board.with(|b| b.is_entry_open(column))>
                <NewCardEntry on_confirm=on_confirm on_cancel=on_cancel />
            </Show>
        </div>
    }
}
