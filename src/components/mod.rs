//! UI Components
//!
//! Reusable Leptos components.

mod card_view;
mod column_view;
mod board_view;
mod card_modal;
mod new_card_form;
mod board_tab_bar;

pub use card_view::CardView;
pub use column_view::ColumnView;
pub use board_view::BoardView;
pub use card_modal::CardModal;
pub use new_card_form::NewCardForm;
pub use board_tab_bar::BoardTabBar;
