//! Board View Component
//!
//! Renders the current board's columns and wires drag-and-drop: a tentative
//! reorder preview while dragging, optimistic apply plus persistence on
//! drop. The reorder engine is called from exactly two places here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::{Card, CardPlacement};
use crate::reorder::{apply_placements, compute_reorder};
use crate::store::{store_add_column, store_apply_placements, use_app_store, AppStateStoreFields};
use crate::components::ColumnView;

use leptos_dragdrop::*;

/// Board view component with DnD support
#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let cards = store.cards().get_untracked();
        let updates = compute_reorder(&cards, dragged_id, target);
        if updates.is_empty() {
            return;
        }
        web_sys::console::log_1(
            &format!("[DND] Drop: card={}, {} placement(s)", dragged_id, updates.len()).into(),
        );

        // Optimistic apply, then persist the full placement set
        store_apply_placements(&store, &updates);
        let placements: Vec<CardPlacement> = updates.into_values().collect();
        spawn_local(async move {
            if let Err(e) = commands::move_card(dragged_id, &placements).await {
                // Discard the optimistic update and re-fetch authoritative state
                web_sys::console::log_1(&format!("[DND] move_card failed: {}", e).into());
                ctx.reload();
            }
        });
    });

    // While dragging, show the tentative ordering; in-memory only
    let display_cards = Memo::new(move |_| {
        let cards = store.cards().get();
        match (dnd.dragging_id_read.get(), dnd.drop_target_read.get()) {
            (Some(active), Some(target)) => {
                let updates = compute_reorder(&cards, active, target);
                apply_placements(&cards, &updates)
            }
            _ => cards,
        }
    });

    let columns = Memo::new(move |_| {
        let mut columns = store.columns().get();
        columns.sort_by_key(|c| c.position);
        columns
    });

    let has_board = move || store.current_board_id().get().is_some();

    view! {
        <div class="board-view">
            {move || if !has_board() {
                view! { <div class="board-empty">"Select or create a board to get started"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <For
                each=move || columns.get()
                key=|column| (column.id, column.position, column.title.clone())
                children=move |column| {
                    let column_id = column.id;
                    let column_cards = Signal::derive(move || {
                        display_cards
                            .get()
                            .into_iter()
                            .filter(|c| c.column_id == column_id)
                            .collect::<Vec<Card>>()
                    });
                    view! { <ColumnView column=column cards=column_cards dnd=dnd /> }
                }
            />

            {move || if has_board() {
                view! { <NewColumnForm /> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}

/// Form for appending a column to the current board
#[component]
fn NewColumnForm() -> impl IntoView {
    let store = use_app_store();
    let (new_title, set_new_title) = signal(String::new());

    let create_column = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let Some(board_id) = store.current_board_id().get() else {
            return;
        };

        spawn_local(async move {
            if let Ok(column) = commands::create_column(board_id, &title).await {
                set_new_title.set(String::new());
                store_add_column(&store, column);
            }
        });
    };

    view! {
        <form class="new-column-form" on:submit=create_column>
            <input
                type="text"
                placeholder="Add column..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
        </form>
    }
}
