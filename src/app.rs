//! Flowdeck Frontend App
//!
//! Main application component: tab bar, board, editor panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::components::{BoardTabBar, BoardView, CardModal};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (editing_card, set_editing_card) = signal::<Option<u32>>(None);

    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (editing_card, set_editing_card),
    ));

    // The backend database initializes in the background; reload once ready
    commands::listen_event("db-initialized", move || {
        web_sys::console::log_1(&"[APP] db-initialized, reloading".into());
        set_reload_trigger.update(|v| *v += 1);
    });

    // Load organizations
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            if let Ok(loaded) = commands::list_organizations().await {
                *store.organizations().write() = loaded;
            }
        });
    });

    // Load boards when organization or trigger changes
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let organization_id = store.current_organization_id().get();
        spawn_local(async move {
            if let Ok(loaded) = commands::list_boards(organization_id).await {
                // Keep the selection valid across reloads
                let current = store.current_board_id().get_untracked();
                let still_there = current
                    .map(|id| loaded.iter().any(|b| b.id == id))
                    .unwrap_or(false);
                let fallback = loaded.first().map(|b| b.id);
                *store.boards().write() = loaded;
                if !still_there {
                    store.current_board_id().set(fallback);
                }
            }
        });
    });

    // Load columns and cards when the board or trigger changes
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let board_id = store.current_board_id().get();
        web_sys::console::log_1(&format!("[APP] Loading board {:?}", board_id).into());
        spawn_local(async move {
            match board_id {
                Some(board_id) => {
                    if let Ok(loaded) = commands::list_columns(board_id).await {
                        *store.columns().write() = loaded;
                    }
                    if let Ok(loaded) = commands::list_cards(board_id).await {
                        web_sys::console::log_1(&format!("[APP] Loaded {} cards", loaded.len()).into());
                        *store.cards().write() = loaded;
                    }
                }
                None => {
                    *store.columns().write() = Vec::new();
                    *store.cards().write() = Vec::new();
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <BoardTabBar />

            <BoardView />

            // Right: card editor panel, shown when a card is open
            <CardModal />
        </div>
    }
}
