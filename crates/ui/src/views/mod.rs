mod card_form;
mod deck_detail;
mod deck_form;
mod deck_list;
mod delete_deck;
mod state;

#[cfg(test)]
mod test_harness;


#[cfg(test)]
mod intent_smoke;

pub use card_form::CardFormView;
pub use deck_detail::DeckDetailView;
pub use deck_form::{DeckCreateView, DeckEditView, FormMode};
pub use deck_list::DeckListView;
pub use delete_deck::DeleteDeckView;
pub use state::{DeleteState, SaveState, ViewError, ViewState, view_state_from_resource};
