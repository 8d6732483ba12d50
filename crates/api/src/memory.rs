//! In-memory stand-in for the deck service.
//!
//! Mirrors the observable behavior of the real server so view tests can run
//! without a network: same validation rules, same conflict semantics, same
//! sentinel for never-studied decks.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;

use flashdeck_core::Clock;
use flashdeck_core::model::{CardDraft, Deck, DeckDraft, DeckId, DeckSummary};

use crate::gateway::{ApiError, DeckGateway};

/// Column width the deck service enforces for names.
pub const NAME_MAX_LENGTH: u32 = 64;

/// Column width the deck service enforces for descriptions.
pub const DESCRIPTION_MAX_LENGTH: u32 = 255;

#[derive(Debug, Clone)]
struct StoredDeck {
    name: String,
    description: String,
    creation_date: DateTime<Utc>,
    modification_date: DateTime<Utc>,
    last_study_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredCard {
    deck_id: DeckId,
    draft: CardDraft,
}

/// Deck gateway backed by process memory.
#[derive(Clone)]
pub struct InMemoryDeckGateway {
    clock: Clock,
    decks: Arc<Mutex<BTreeMap<DeckId, StoredDeck>>>,
    cards: Arc<Mutex<Vec<StoredCard>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryDeckGateway {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            decks: Arc::new(Mutex::new(BTreeMap::new())),
            cards: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Backdates a deck's last-study timestamp. Test setup helper; the real
    /// service updates this field only when a study session ends.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status(400)` if the deck does not exist.
    pub fn record_study(&self, id: DeckId, at: DateTime<Utc>) -> Result<(), ApiError> {
        let mut decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        let deck = decks
            .get_mut(&id)
            .ok_or(ApiError::Status(StatusCode::BAD_REQUEST))?;
        deck.last_study_date = at;
        Ok(())
    }

    /// Returns the cards stored for a deck, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the store is poisoned.
    pub fn cards(&self, deck_id: DeckId) -> Result<Vec<CardDraft>, ApiError> {
        let cards = self
            .cards
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Ok(cards
            .iter()
            .filter(|card| card.deck_id == deck_id)
            .map(|card| card.draft.clone())
            .collect())
    }

    fn card_count(cards: &[StoredCard], deck_id: DeckId) -> u32 {
        cards.iter().filter(|card| card.deck_id == deck_id).count() as u32
    }

    fn validate_draft(draft: &DeckDraft) -> Result<(), ApiError> {
        // Same checks the server runs: empty names and over-limit fields are
        // rejected with a 400 before anything is written.
        if draft.name().is_empty() {
            return Err(ApiError::Status(StatusCode::BAD_REQUEST));
        }
        if draft.name().chars().count() > NAME_MAX_LENGTH as usize
            || draft.description().chars().count() > DESCRIPTION_MAX_LENGTH as usize
        {
            return Err(ApiError::Status(StatusCode::BAD_REQUEST));
        }
        Ok(())
    }
}

#[async_trait]
impl DeckGateway for InMemoryDeckGateway {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, ApiError> {
        let decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Ok(decks
            .iter()
            .map(|(id, deck)| DeckSummary::new(*id, deck.name.clone(), deck.description.clone()))
            .collect())
    }

    async fn get_deck(&self, id: DeckId) -> Result<Deck, ApiError> {
        let decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        let cards = self
            .cards
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let deck = decks
            .get(&id)
            .ok_or(ApiError::Status(StatusCode::BAD_REQUEST))?;
        Ok(Deck::new(
            id,
            deck.name.clone(),
            deck.description.clone(),
            deck.creation_date,
            deck.modification_date,
            deck.last_study_date,
            Self::card_count(&cards, id),
        ))
    }

    async fn create_deck(&self, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        Self::validate_draft(draft)?;

        let mut decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        if decks.values().any(|deck| deck.name == draft.name()) {
            return Err(ApiError::NameTaken);
        }

        let id = DeckId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let now = self.clock.now();
        decks.insert(
            id,
            StoredDeck {
                name: draft.name().to_owned(),
                description: draft.description().to_owned(),
                creation_date: now,
                modification_date: now,
                // The service stores its zero time here until the deck is
                // first studied.
                last_study_date: DateTime::UNIX_EPOCH,
            },
        );
        Ok(id)
    }

    async fn update_deck(&self, id: DeckId, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        Self::validate_draft(draft)?;

        let mut decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        if decks
            .iter()
            .any(|(other_id, deck)| *other_id != id && deck.name == draft.name())
        {
            return Err(ApiError::NameTaken);
        }

        let deck = decks
            .get_mut(&id)
            .ok_or(ApiError::Status(StatusCode::BAD_REQUEST))?;
        deck.name = draft.name().to_owned();
        deck.description = draft.description().to_owned();
        deck.modification_date = self.clock.now();
        Ok(id)
    }

    async fn delete_deck(&self, id: DeckId) -> Result<(), ApiError> {
        let mut decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        let mut cards = self
            .cards
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if decks.remove(&id).is_none() {
            return Err(ApiError::Status(StatusCode::BAD_REQUEST));
        }
        cards.retain(|card| card.deck_id != id);
        Ok(())
    }

    async fn name_max_length(&self) -> Result<u32, ApiError> {
        Ok(NAME_MAX_LENGTH)
    }

    async fn description_max_length(&self) -> Result<u32, ApiError> {
        Ok(DESCRIPTION_MAX_LENGTH)
    }

    async fn create_card(&self, deck_id: DeckId, draft: &CardDraft) -> Result<(), ApiError> {
        if draft.validate().is_err() {
            return Err(ApiError::Status(StatusCode::BAD_REQUEST));
        }

        let decks = self
            .decks
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        if !decks.contains_key(&deck_id) {
            return Err(ApiError::Status(StatusCode::BAD_REQUEST));
        }

        let mut cards = self
            .cards
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        cards.push(StoredCard {
            deck_id,
            draft: draft.clone(),
        });
        Ok(())
    }
}
