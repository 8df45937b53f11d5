use leptos::html::Div;
use leptos::prelude::*;
use crate::core::models::CardRecord;
use crate::core::services::console;
use crate::features::kanban::services::{CardBounds, HoverTarget};

// One draggable card. Knows nothing about the board; every user action is
// reported through the callbacks it was built with.
#[component]
pub fn Card(
    card: CardRecord,
    #[prop(into)] dragging: Signal<bool>,
    on_delete: Callback<String>,
    on_drag_start: Callback<String>,
    on_drag_over: Callback<HoverTarget>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let node_ref: NodeRef<Div> = NodeRef::new();
    let CardRecord { id, text } = card;

    let handle_drag_start = {
        let id = id.clone();
        move |ev: leptos::ev::DragEvent| {
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                // Firefox will not start a drag without a payload
                console::log_err("Failed to set drag payload", transfer.set_data("text/plain", &id));
            }
            on_drag_start.run(id.clone());
        }
    };

    let handle_drag_over = {
        let id = id.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(element) = node_ref.get_untracked() {
                let rect = element.get_bounding_client_rect();
                on_drag_over.run(HoverTarget {
                    card_id: id.clone(),
                    bounds: CardBounds { top: rect.top(), height: rect.height() },
                    pointer_y: f64::from(ev.client_y()),
                });
            }
        }
    };

    let handle_delete = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_delete.run(id.clone());
        }
    };

    view! {
        <div
            node_ref=node_ref
            class="card"
            class:dragging=move || dragging.get()
            draggable="true"
            data-id=id
            on:dragstart=handle_drag_start
            on:dragover=handle_drag_over
            on:dragend=move |_| on_drag_end.run(())
        >
            <div class="card-text">{text}</div>
            <button class="delete-card" title="Delete card" on:click=handle_delete>"✖"</button>
        </div>
    }
}
