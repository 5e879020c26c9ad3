//! Column View Component
//!
//! One board column: header with rename/delete, the ordered card list, an
//! empty drop area that doubles as the append target, and the new-card form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{Card, Column};
use crate::store::{store_remove_column, use_app_store, AppStateStoreFields};
use crate::components::{CardView, NewCardForm};

use leptos_dragdrop::*;

#[component]
pub fn ColumnView(
    column: Column,
    cards: Signal<Vec<Card>>,
    dnd: DndSignals,
) -> impl IntoView {
    let store = use_app_store();
    let column_id = column.id;
    let board_id = column.board_id;

    let (renaming, set_renaming) = signal(false);
    let (title, set_title) = signal(column.title.clone());

    let sorted_cards = Memo::new(move |_| {
        let mut list = cards.get();
        list.sort_by_key(|c| c.position);
        list
    });

    // The area below the cards is the drop target for "append to column";
    // it is the only way into an empty column
    let on_area_mouseenter = make_on_column_mouseenter(dnd, column_id);
    let on_area_mouseleave = make_on_mouseleave(dnd);
    let area_class = move || {
        let mut c = String::from("column-drop-area");
        if matches!(dnd.drop_target_read.get(), Some(DropTarget::Column(id)) if id == column_id) {
            c.push_str(" drop-target");
        }
        c
    };

    let delete_column = move |_| {
        spawn_local(async move {
            if commands::delete_column(column_id).await.is_ok() {
                store_remove_column(&store, column_id);
            }
        });
    };

    let submit_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get();
        if new_title.is_empty() {
            return;
        }
        spawn_local(async move {
            if commands::rename_column(column_id, &new_title).await.is_ok() {
                store
                    .columns()
                    .write()
                    .iter_mut()
                    .find(|c| c.id == column_id)
                    .map(|c| c.title = new_title.clone());
            }
        });
        set_renaming.set(false);
    };

    view! {
        <div class="column">
            <div class="column-header">
                {move || if renaming.get() {
                    view! {
                        <form on:submit=submit_rename>
                            <input
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                                on:blur=move |_| set_renaming.set(false)
                            />
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <span on:dblclick=move |_| set_renaming.set(true)>
                            {move || title.get()}
                        </span>
                    }.into_any()
                }}
                <button class="column-delete-btn" on:click=delete_column>"\u{d7}"</button>
            </div>

            <div class="column-cards">
                <For
                    each=move || sorted_cards.get()
                    key=|card| {
                        // Tuple of the mutable fields so changes re-render
                        (
                            card.id,
                            card.position,
                            card.column_id,
                            card.title.clone(),
                            card.due_date.clone(),
                        )
                    }
                    children=move |card| {
                        view! { <CardView card=card dnd=dnd /> }
                    }
                />

                <div
                    class=area_class
                    on:mouseenter=on_area_mouseenter
                    on:mouseleave=on_area_mouseleave
                ></div>
            </div>

            <NewCardForm column_id=column_id board_id=board_id />
        </div>
    }
}
