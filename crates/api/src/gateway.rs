//! Client-side port for the deck service.

use async_trait::async_trait;
use thiserror::Error;

use flashdeck_core::model::{CardDraft, Deck, DeckDraft, DeckId, DeckSummary};

/// Errors emitted by deck gateways.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The server rejected a create or rename because another deck already
    /// uses the name.
    #[error("a deck with that name already exists")]
    NameTaken,
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("connection error: {0}")]
    Connection(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Everything the views need from the deck service.
///
/// The production implementation speaks HTTP; tests swap in an in-memory
/// double with the same observable behavior.
#[async_trait]
pub trait DeckGateway: Send + Sync {
    /// Fetches every deck as list rows.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the response cannot be
    /// decoded.
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, ApiError>;

    /// Fetches one deck's full snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the deck does not exist or the request fails.
    async fn get_deck(&self, id: DeckId) -> Result<Deck, ApiError>;

    /// Creates a deck and returns its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NameTaken` if another deck already uses the name.
    async fn create_deck(&self, draft: &DeckDraft) -> Result<DeckId, ApiError>;

    /// Overwrites a deck's name and description.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NameTaken` if the new name collides with another
    /// deck.
    async fn update_deck(&self, id: DeckId, draft: &DeckDraft) -> Result<DeckId, ApiError>;

    /// Deletes a deck and everything in it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_deck(&self, id: DeckId) -> Result<(), ApiError>;

    /// Fetches the maximum accepted deck name length.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the limit is missing from
    /// the response.
    async fn name_max_length(&self) -> Result<u32, ApiError>;

    /// Fetches the maximum accepted deck description length.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the limit is missing from
    /// the response.
    async fn description_max_length(&self) -> Result<u32, ApiError>;

    /// Adds one card to a deck.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the deck does not exist or the request fails.
    async fn create_card(&self, deck_id: DeckId, draft: &CardDraft) -> Result<(), ApiError>;
}
