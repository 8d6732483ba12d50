use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

use crate::model::ids::DeckId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckDraftError {
    #[error("deck name cannot be empty")]
    EmptyName,

    #[error("deck name cannot exceed {max} characters")]
    NameTooLong { max: u32 },

    #[error("deck description cannot exceed {max} characters")]
    DescriptionTooLong { max: u32 },
}

//
// ─── FIELD LIMITS ──────────────────────────────────────────────────────────────
//

/// Maximum lengths the deck service accepts for deck fields.
///
/// The limits are declared by the server and fetched before the deck form
/// renders, so inputs can carry matching `maxlength` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    name_max: u32,
    description_max: u32,
}

impl FieldLimits {
    /// Creates a new set of field limits.
    #[must_use]
    pub fn new(name_max: u32, description_max: u32) -> Self {
        Self {
            name_max,
            description_max,
        }
    }

    #[must_use]
    pub fn name_max(&self) -> u32 {
        self.name_max
    }

    #[must_use]
    pub fn description_max(&self) -> u32 {
        self.description_max
    }
}

//
// ─── STUDY STATUS ──────────────────────────────────────────────────────────────
//

/// Whether a deck has ever been studied.
///
/// The server encodes "never studied" as a timestamp far in the past rather
/// than omitting the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyStatus {
    Never,
    StudiedAt(DateTime<Utc>),
}

/// Last-study timestamps in or before this year are the sentinel for a deck
/// that was never studied.
const NEVER_STUDIED_CUTOFF_YEAR: i32 = 2000;

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// One row of the deck list: identity plus display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    id: DeckId,
    name: String,
    description: String,
}

impl DeckSummary {
    /// Creates a new `DeckSummary`.
    #[must_use]
    pub fn new(id: DeckId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A deck's full snapshot as reported by the detail endpoint.
///
/// Everything besides `name` and `description` is server-computed; the client
/// never writes those fields back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    name: String,
    description: String,
    creation_date: DateTime<Utc>,
    modification_date: DateTime<Utc>,
    last_study_date: DateTime<Utc>,
    total_cards: u32,
}

impl Deck {
    /// Creates a new `Deck` from already-decoded server data.
    #[must_use]
    pub fn new(
        id: DeckId,
        name: impl Into<String>,
        description: impl Into<String>,
        creation_date: DateTime<Utc>,
        modification_date: DateTime<Utc>,
        last_study_date: DateTime<Utc>,
        total_cards: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            creation_date,
            modification_date,
            last_study_date,
            total_cards,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    #[must_use]
    pub fn modification_date(&self) -> DateTime<Utc> {
        self.modification_date
    }

    #[must_use]
    pub fn last_study_date(&self) -> DateTime<Utc> {
        self.last_study_date
    }

    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.total_cards
    }

    /// Resolves the last-study timestamp against the sentinel cutoff.
    #[must_use]
    pub fn study_status(&self) -> StudyStatus {
        if self.last_study_date.year() <= NEVER_STUDIED_CUTOFF_YEAR {
            StudyStatus::Never
        } else {
            StudyStatus::StudiedAt(self.last_study_date)
        }
    }
}

//
// ─── DECK DRAFT ────────────────────────────────────────────────────────────────
//

/// The client-writable deck fields, trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckDraft {
    name: String,
    description: String,
}

impl DeckDraft {
    /// Creates a draft from raw form input, trimming both fields.
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            description: description.trim().to_owned(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks the draft against the server-declared limits.
    ///
    /// # Errors
    ///
    /// Returns `DeckDraftError` if the name is empty or either field exceeds
    /// its limit. Lengths are counted in characters, matching the `maxlength`
    /// behavior of the form inputs.
    pub fn validate(&self, limits: FieldLimits) -> Result<(), DeckDraftError> {
        if self.name.is_empty() {
            return Err(DeckDraftError::EmptyName);
        }
        if self.name.chars().count() > limits.name_max() as usize {
            return Err(DeckDraftError::NameTooLong {
                max: limits.name_max(),
            });
        }
        if self.description.chars().count() > limits.description_max() as usize {
            return Err(DeckDraftError::DescriptionTooLong {
                max: limits.description_max(),
            });
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
