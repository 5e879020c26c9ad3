//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload board data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload board data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Card currently open in the editor panel - read
    pub editing_card: ReadSignal<Option<u32>>,
    /// Card currently open in the editor panel - write
    set_editing_card: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        editing_card: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            editing_card: editing_card.0,
            set_editing_card: editing_card.1,
        }
    }

    /// Trigger a reload of board data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open or close the card editor panel
    pub fn set_editing_card(&self, card_id: Option<u32>) {
        self.set_editing_card.set(card_id);
    }
}
