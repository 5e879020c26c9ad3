//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashMap;

use crate::models::{Board, Card, CardPlacement, Column, Organization};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All organizations
    pub organizations: Vec<Organization>,
    /// Boards of the current organization
    pub boards: Vec<Board>,
    /// Columns of the current board
    pub columns: Vec<Column>,
    /// Cards of the current board (all columns)
    pub cards: Vec<Card>,
    /// Current organization ID
    pub current_organization_id: u32,
    /// Currently open board (None until one is selected)
    pub current_board_id: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_organization_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a card to the store
pub fn store_add_card(store: &AppStore, card: Card) {
    store.cards().write().push(card);
}

/// Update a card in the store by ID
pub fn store_update_card(store: &AppStore, updated_card: Card) {
    store.cards().write().iter_mut()
        .find(|card| card.id == updated_card.id)
        .map(|card| *card = updated_card);
}

/// Remove a card from the store by ID
pub fn store_remove_card(store: &AppStore, card_id: u32) {
    store.cards().write().retain(|card| card.id != card_id);
}

/// Apply reorder placements to the store cards (optimistic update)
pub fn store_apply_placements(store: &AppStore, updates: &HashMap<u32, CardPlacement>) {
    let binding = store.cards();
    let mut cards = binding.write();
    for card in cards.iter_mut() {
        if let Some(placement) = updates.get(&card.id) {
            card.column_id = placement.column_id;
            card.position = placement.position;
        }
    }
}

/// Add a column to the store
pub fn store_add_column(store: &AppStore, column: Column) {
    store.columns().write().push(column);
}

/// Remove a column and its cards from the store
pub fn store_remove_column(store: &AppStore, column_id: u32) {
    store.columns().write().retain(|column| column.id != column_id);
    store.cards().write().retain(|card| card.column_id != column_id);
}

/// Add a board to the store
pub fn store_add_board(store: &AppStore, board: Board) {
    store.boards().write().push(board);
}

/// Remove a board from the store
pub fn store_remove_board(store: &AppStore, board_id: u32) {
    store.boards().write().retain(|board| board.id != board_id);
}

/// Add an organization to the store
pub fn store_add_organization(store: &AppStore, organization: Organization) {
    store.organizations().write().push(organization);
}
