mod card;
mod deck;
mod ids;

pub use ids::{DeckId, ParseIdError};

pub use card::{CARD_FIELD_BACK, CARD_FIELD_FRONT, CardDraft, CardDraftError};
pub use deck::{Deck, DeckDraft, DeckDraftError, DeckSummary, FieldLimits, StudyStatus};
