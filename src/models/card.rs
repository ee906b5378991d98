//! Card is a single flashcard: an opaque word plus review bookkeeping.
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// A flashcard tracked by the scheduler.
///
/// `id` is assigned once and never changes; `last_reviewed` only moves
/// forward as reviews are recorded. The word itself is opaque payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub word: String,
    pub last_reviewed: SystemTime,
}

impl Card {
    /// Creates a card with a freshly generated id, stamped with `now`.
    pub fn new(word: String, now: SystemTime) -> Self {
        Self::with_id(Uuid::new_v4(), word, now)
    }

    /// Creates a card with a caller-supplied id.
    pub fn with_id(id: Uuid, word: String, now: SystemTime) -> Self {
        Self {
            id,
            word,
            last_reviewed: now,
        }
    }
}
