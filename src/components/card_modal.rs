//! Card Editor Panel
//!
//! Right-side panel for editing a card's payload (title, markdown
//! description with live preview, due date) and browsing its history.
//! Description edits are debounced before being persisted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::commands;
use crate::context::AppContext;
use crate::markdown::parse_markdown;
use crate::models::{CardHistory, Column};
use crate::store::{store_remove_card, store_update_card, use_app_store, AppStateStoreFields};

const DESCRIPTION_DEBOUNCE_MS: u32 = 600;

/// Human-readable label for one history entry
fn history_label(entry: &CardHistory, columns: &[Column]) -> String {
    let column_title = |id: Option<u32>| -> String {
        id.and_then(|id| columns.iter().find(|c| c.id == id))
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "?".to_string())
    };

    match entry.action.as_str() {
        "created" => format!("Created in {}", column_title(entry.to_column_id)),
        "moved" => format!(
            "Moved {} \u{2192} {}",
            column_title(entry.from_column_id),
            column_title(entry.to_column_id)
        ),
        "reordered" => format!("Reordered within {}", column_title(entry.to_column_id)),
        "updated" => "Updated".to_string(),
        "deleted" => "Deleted".to_string(),
        other => other.to_string(),
    }
}

#[component]
pub fn CardModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (history, set_history) = signal(Vec::<CardHistory>::new());
    // Bumped on every keystroke; a save only fires if it is still current
    let (description_version, set_description_version) = signal(0u32);

    // Load fields and history when a card is opened
    Effect::new(move |_| {
        let Some(card_id) = ctx.editing_card.get() else {
            return;
        };
        let card = store
            .cards()
            .get_untracked()
            .into_iter()
            .find(|c| c.id == card_id);
        if let Some(card) = card {
            set_title.set(card.title);
            set_description.set(card.description.unwrap_or_default());
            set_due_date.set(card.due_date.unwrap_or_default());
        }
        spawn_local(async move {
            if let Ok(entries) = commands::list_card_history(card_id).await {
                set_history.set(entries);
            }
        });
    });

    let save_title = move || {
        let Some(card_id) = ctx.editing_card.get_untracked() else {
            return;
        };
        let new_title = title.get_untracked();
        if new_title.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Ok(updated) = commands::update_card(card_id, Some(&new_title), None, None).await {
                store_update_card(&store, updated);
            }
        });
    };

    let on_description_input = move |ev: web_sys::Event| {
        set_description.set(event_target_value(&ev));
        let version = description_version.get_untracked() + 1;
        set_description_version.set(version);
        let Some(card_id) = ctx.editing_card.get_untracked() else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(DESCRIPTION_DEBOUNCE_MS).await;
            // A newer keystroke supersedes this save
            if description_version.get_untracked() != version {
                return;
            }
            let text = description.get_untracked();
            if let Ok(updated) = commands::update_card(card_id, None, Some(&text), None).await {
                store_update_card(&store, updated);
            }
        });
    };

    let on_due_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_due_date.set(value.clone());
        let Some(card_id) = ctx.editing_card.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Ok(updated) = commands::update_card(card_id, None, None, Some(&value)).await {
                store_update_card(&store, updated);
            }
        });
    };

    let delete_card = move |_| {
        let Some(card_id) = ctx.editing_card.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if commands::delete_card(card_id).await.is_ok() {
                store_remove_card(&store, card_id);
                ctx.set_editing_card(None);
            }
        });
    };

    view! {
        {move || ctx.editing_card.get().map(|_card_id| {
            view! {
                <div class="card-editor">
                    <div class="editor-actions">
                        <button class="delete-btn" on:click=delete_card>"Delete"</button>
                        <button class="close-btn" on:click=move |_| ctx.set_editing_card(None)>
                            "\u{d7}"
                        </button>
                    </div>

                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        on:blur=move |_| save_title()
                    />

                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:change=on_due_change
                    />

                    <textarea
                        placeholder="Description (markdown)..."
                        prop:value=move || description.get()
                        on:input=on_description_input
                    ></textarea>

                    <div
                        class="description-preview"
                        inner_html=move || parse_markdown(&description.get())
                    ></div>

                    <div class="history-list">
                        <For
                            each=move || history.get()
                            key=|entry| entry.id
                            children=move |entry| {
                                let label = move || {
                                    let columns = store.columns().get_untracked();
                                    history_label(&entry, &columns)
                                };
                                view! { <div class="history-entry">{label}</div> }
                            }
                        />
                    </div>
                </div>
            }
        })}
    }
}
