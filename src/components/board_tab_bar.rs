//! Board Tab Bar Component
//!
//! Header bar with the organization switcher and one tab per board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_add_board, store_add_organization, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (renaming_board, set_renaming_board) = signal::<Option<u32>>(None);
    let (rename_title, set_rename_title) = signal(String::new());
    let (adding_org, set_adding_org) = signal(false);
    let (new_org_name, set_new_org_name) = signal(String::new());

    let on_org_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        if let Ok(id) = select.value().parse::<u32>() {
            store.current_organization_id().set(id);
            store.current_board_id().set(None);
            ctx.reload();
        }
    };

    let on_add_org = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_org_name.get();
        if name.is_empty() {
            return;
        }

        spawn_local(async move {
            if let Ok(org) = commands::create_organization(&name).await {
                let org_id = org.id;
                store_add_organization(&store, org);
                store.current_organization_id().set(org_id);
                store.current_board_id().set(None);
                ctx.reload();
            }
        });

        set_new_org_name.set(String::new());
        set_adding_org.set(false);
    };

    let on_add_board = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let organization_id = store.current_organization_id().get();

        spawn_local(async move {
            if let Ok(board) = commands::create_board(organization_id, &title).await {
                let board_id = board.id;
                store_add_board(&store, board);
                store.current_board_id().set(Some(board_id));
            }
        });

        set_new_title.set(String::new());
        set_adding.set(false);
    };

    let on_rename_board = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(board_id) = renaming_board.get() else {
            return;
        };
        let title = rename_title.get();
        if !title.is_empty() {
            spawn_local(async move {
                if commands::rename_board(board_id, &title).await.is_ok() {
                    store
                        .boards()
                        .write()
                        .iter_mut()
                        .find(|b| b.id == board_id)
                        .map(|b| b.title = title.clone());
                }
            });
        }
        set_renaming_board.set(None);
    };

    view! {
        <div class="board-tab-bar">
            <select class="org-select" on:change=on_org_change>
                <For
                    each=move || store.organizations().get()
                    key=|org| (org.id, org.name.clone())
                    children=move |org| {
                        let id = org.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || store.current_organization_id().get() == id
                            >
                                {org.name.clone()}
                            </option>
                        }
                    }
                />
            </select>

            {move || if adding_org.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add_org>
                        <input
                            type="text"
                            placeholder="Organization name"
                            prop:value=move || new_org_name.get()
                            on:input=move |ev| set_new_org_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="board-add-btn" on:click=move |_| set_adding_org.set(true)>
                        "+ Org"
                    </button>
                }.into_any()
            }}

            <For
                each=move || store.boards().get()
                key=|board| (board.id, board.title.clone())
                children=move |board| {
                    let id = board.id;
                    let title = board.title.clone();
                    let is_active = move || store.current_board_id().get() == Some(id);
                    let tab_class = move || {
                        if is_active() { "board-tab active" } else { "board-tab" }
                    };

                    view! {
                        {move || if renaming_board.get() == Some(id) {
                            view! {
                                <form class="board-add-form" on:submit=on_rename_board>
                                    <input
                                        type="text"
                                        prop:value=move || rename_title.get()
                                        on:input=move |ev| set_rename_title.set(event_target_value(&ev))
                                        on:blur=move |_| set_renaming_board.set(None)
                                    />
                                </form>
                            }.into_any()
                        } else {
                            let tab_title = title.clone();
                            let rename_seed = title.clone();
                            view! {
                                <button
                                    class=tab_class
                                    on:click=move |_| store.current_board_id().set(Some(id))
                                    on:dblclick=move |_| {
                                        set_rename_title.set(rename_seed.clone());
                                        set_renaming_board.set(Some(id));
                                    }
                                >
                                    {tab_title}
                                </button>
                            }.into_any()
                        }}
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add_board>
                        <input
                            type="text"
                            placeholder="Board title"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"\u{d7}"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="board-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
