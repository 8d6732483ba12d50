use thiserror::Error;

//
// ─── CARD FIELDS ───────────────────────────────────────────────────────────────
//

/// Wire name of the question side of a card.
pub const CARD_FIELD_FRONT: &str = "front";

/// Wire name of the answer side of a card.
pub const CARD_FIELD_BACK: &str = "back";

//
// ─── CARD DRAFT ────────────────────────────────────────────────────────────────
//

/// A new card as entered into the card form.
///
/// Cards have no client-side identity; the draft is submitted and forgotten.
/// The front and back are trimmed, the source is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    front: String,
    back: String,
    source: String,
}

impl CardDraft {
    /// Creates a draft from raw form input.
    #[must_use]
    pub fn new(front: &str, back: &str, source: &str) -> Self {
        Self {
            front: front.trim().to_owned(),
            back: back.trim().to_owned(),
            source: source.to_owned(),
        }
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Checks that both card sides carry text. The source is optional.
    ///
    /// # Errors
    ///
    /// Returns `CardDraftError` if the front or the back is empty.
    pub fn validate(&self) -> Result<(), CardDraftError> {
        if self.front.is_empty() {
            return Err(CardDraftError::EmptyFront);
        }
        if self.back.is_empty() {
            return Err(CardDraftError::EmptyBack);
        }
        Ok(())
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardDraftError {
    #[error("card front cannot be empty")]
    EmptyFront,

    #[error("card back cannot be empty")]
    EmptyBack,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
