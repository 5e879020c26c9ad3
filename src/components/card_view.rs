//! Card View Component
//!
//! A single card tile: drag handle for the whole surface, click to open
//! the editor panel.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::markdown::parse_markdown_inline;
use crate::models::Card;

use leptos_dragdrop::*;

#[component]
pub fn CardView(card: Card, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = card.id;

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_card_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Card(tid)) if tid == id)
    };

    let card_class = move || {
        let mut c = String::from("card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let on_click = move |_| {
        // A drop releases over a card; don't treat that as an open-click
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.set_editing_card(Some(id));
    };

    let title_html = parse_markdown_inline(&card.title);

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=on_click
        >
            <div class="card-title" inner_html=title_html></div>
            {card.due_date.clone().map(|due| view! {
                <div class="card-due">{format!("\u{23f0} {}", due)}</div>
            })}
        </div>
    }
}
