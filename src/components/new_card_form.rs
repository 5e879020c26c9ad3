//! New Card Form Component
//!
//! Form at the bottom of each column for creating cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateCardArgs};
use crate::store::{store_add_card, use_app_store};

#[component]
pub fn NewCardForm(column_id: u32, board_id: u32) -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }

        spawn_local(async move {
            let args = CreateCardArgs {
                column_id,
                board_id,
                title: &title,
                description: None,
                due_date: None,
            };
            if let Ok(card) = commands::create_card(&args).await {
                set_new_title.set(String::new());
                store_add_card(&store, card);
            }
        });
    };

    view! {
        <form class="new-card-form" on:submit=create_card>
            <input
                type="text"
                placeholder="Add card..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
        </form>
    }
}
