use flashdeck_core::model::{Deck, DeckId, DeckSummary, StudyStatus};

use crate::vm::time_fmt::format_date;

/// UI-ready representation of one row in the deck list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckRowVm {
    pub id: DeckId,
    pub name: String,
    pub description: String,
}

impl From<&DeckSummary> for DeckRowVm {
    fn from(deck: &DeckSummary) -> Self {
        Self {
            id: deck.id(),
            name: deck.name().to_owned(),
            description: deck.description().to_owned(),
        }
    }
}

/// Convert deck summaries into list rows.
#[must_use]
pub fn map_deck_rows(decks: &[DeckSummary]) -> Vec<DeckRowVm> {
    decks.iter().map(DeckRowVm::from).collect()
}

/// UI-ready representation of the deck detail card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckDetailVm {
    pub id: DeckId,
    pub name: String,
    pub description: String,
    pub created_str: String,
    pub updated_str: String,
    pub last_studied_str: String,
    pub total_cards: u32,
}

/// Convert a deck snapshot into display strings for the detail card.
#[must_use]
pub fn map_deck_detail(deck: &Deck) -> DeckDetailVm {
    let last_studied_str = match deck.study_status() {
        StudyStatus::Never => "Never".to_owned(),
        StudyStatus::StudiedAt(at) => format_date(at),
    };

    DeckDetailVm {
        id: deck.id(),
        name: deck.name().to_owned(),
        description: deck.description().to_owned(),
        created_str: format_date(deck.creation_date()),
        updated_str: format_date(deck.modification_date()),
        last_studied_str,
        total_cards: deck.total_cards(),
    }
}
