//! Reqwest-backed gateway for the deck service.

use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use flashdeck_core::model::{
    CARD_FIELD_BACK, CARD_FIELD_FRONT, CardDraft, Deck, DeckDraft, DeckId, DeckSummary,
};

use crate::gateway::{ApiError, DeckGateway};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the deck service lives.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `FLASHDECK_API_URL`, falling back to the default origin.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("FLASHDECK_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

/// Talks to the deck service over HTTP and JSON.
///
/// Responses are decoded defensively: a deck with missing display fields
/// still renders, only a missing field limit is treated as an error.
#[derive(Clone)]
pub struct HttpDeckGateway {
    client: Client,
    base_url: String,
}

impl HttpDeckGateway {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_max_length(&self, path: &str) -> Result<u32, ApiError> {
        let url = self.url(path);
        debug!(%url, "fetching field limit");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "field limit request failed");
            return Err(ApiError::Status(status));
        }

        let body: MaxLengthDto = response.json().await?;
        Ok(body.max_length)
    }
}

#[async_trait]
impl DeckGateway for HttpDeckGateway {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, ApiError> {
        let url = self.url("/deck");
        debug!(%url, "listing decks");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "deck list request failed");
            return Err(ApiError::Status(status));
        }

        let rows: Vec<DeckSummaryDto> = response.json().await?;
        Ok(rows.into_iter().map(DeckSummaryDto::into_summary).collect())
    }

    async fn get_deck(&self, id: DeckId) -> Result<Deck, ApiError> {
        let url = self.url(&format!("/deck/{id}"));
        debug!(%url, "fetching deck");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "deck fetch request failed");
            return Err(ApiError::Status(status));
        }

        let body: DeckDto = response.json().await?;
        Ok(body.into_deck())
    }

    async fn create_deck(&self, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        let url = self.url("/deck");
        debug!(%url, name = draft.name(), "creating deck");
        let response = self
            .client
            .post(&url)
            .json(&DeckWriteDto::from_draft(draft))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(ApiError::NameTaken);
        }
        if !status.is_success() {
            warn!(%url, %status, "deck create request failed");
            return Err(ApiError::Status(status));
        }

        let body: IdDto = response.json().await?;
        Ok(body.id.into_deck_id())
    }

    async fn update_deck(&self, id: DeckId, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        let url = self.url(&format!("/deck/{id}"));
        debug!(%url, name = draft.name(), "updating deck");
        let response = self
            .client
            .post(&url)
            .json(&DeckWriteDto::from_draft(draft))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(ApiError::NameTaken);
        }
        if !status.is_success() {
            warn!(%url, %status, "deck update request failed");
            return Err(ApiError::Status(status));
        }

        let body: IdDto = response.json().await?;
        Ok(body.id.into_deck_id())
    }

    async fn delete_deck(&self, id: DeckId) -> Result<(), ApiError> {
        let url = self.url(&format!("/deck/{id}"));
        debug!(%url, "deleting deck");
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "deck delete request failed");
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    async fn name_max_length(&self) -> Result<u32, ApiError> {
        self.fetch_max_length("/deck/nameMaxLength").await
    }

    async fn description_max_length(&self) -> Result<u32, ApiError> {
        self.fetch_max_length("/deck/descriptionMaxLength").await
    }

    async fn create_card(&self, deck_id: DeckId, draft: &CardDraft) -> Result<(), ApiError> {
        let url = self.url(&format!("/deck/{deck_id}/card"));
        debug!(%url, "creating card");
        let response = self
            .client
            .post(&url)
            .json(&CardWriteDto::from_draft(draft))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "card create request failed");
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}

/// Deck ids arrive as a JSON number from the detail endpoint but as a string
/// from the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_deck_id(self) -> DeckId {
        match self {
            RawId::Number(value) => DeckId::new(value),
            RawId::Text(text) => text.parse().unwrap_or(DeckId::new(0)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeckSummaryDto {
    id: Option<RawId>,
    name: Option<String>,
    description: Option<String>,
}

impl DeckSummaryDto {
    fn into_summary(self) -> DeckSummary {
        DeckSummary::new(
            self.id.map_or(DeckId::new(0), RawId::into_deck_id),
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct DeckDto {
    id: Option<RawId>,
    name: Option<String>,
    description: Option<String>,
    creation_date: Option<DateTime<Utc>>,
    modification_date: Option<DateTime<Utc>>,
    last_study_date: Option<DateTime<Utc>>,
    total_cards: Option<u32>,
}

impl DeckDto {
    fn into_deck(self) -> Deck {
        Deck::new(
            self.id.map_or(DeckId::new(0), RawId::into_deck_id),
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.creation_date.unwrap_or(DateTime::UNIX_EPOCH),
            self.modification_date.unwrap_or(DateTime::UNIX_EPOCH),
            self.last_study_date.unwrap_or(DateTime::UNIX_EPOCH),
            self.total_cards.unwrap_or(0),
        )
    }
}

#[derive(Debug, Serialize)]
struct DeckWriteDto<'a> {
    name: &'a str,
    description: &'a str,
}

impl<'a> DeckWriteDto<'a> {
    fn from_draft(draft: &'a DeckDraft) -> Self {
        Self {
            name: draft.name(),
            description: draft.description(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CardWriteDto<'a> {
    content: CardContentDto<'a>,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct CardContentDto<'a> {
    fields: [&'static str; 2],
    values: [&'a str; 2],
}

impl<'a> CardWriteDto<'a> {
    fn from_draft(draft: &'a CardDraft) -> Self {
        Self {
            content: CardContentDto {
                fields: [CARD_FIELD_FRONT, CARD_FIELD_BACK],
                values: [draft.front(), draft.back()],
            },
            source: draft.source(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IdDto {
    id: RawId,
}

#[derive(Debug, Deserialize)]
struct MaxLengthDto {
    #[serde(rename = "maxLength")]
    max_length: u32,
}
