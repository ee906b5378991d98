//! Leitner box scheduler.
//! Owns the ordered box sequence and all card movement between boxes:
//! new cards enter the first box, correct answers advance a card one box,
//! incorrect answers send it back to the start.

use super::card_box::day_of;
use super::intervals::review_intervals;
use super::{Card, CardBox};
use std::time::SystemTime;
use uuid::Uuid;

/// Maximum cards returned by [`LeitnerSystem::due_for_review`].
pub const DEFAULT_REVIEW_LIMIT: usize = 10;

/// An ordered sequence of boxes: index 0 holds the newest cards, the last
/// index the most mastered.
///
/// The scheduler is synchronous and keeps no internal locking. An
/// application sharing one instance across threads must serialize access
/// externally.
pub struct LeitnerSystem {
    boxes: Vec<CardBox>,
}

impl LeitnerSystem {
    /// Creates a system with `box_count` boxes (clamped to at least 2),
    /// each empty and stamped with `now`.
    pub fn new(box_count: usize, now: SystemTime) -> Self {
        let boxes = review_intervals(box_count)
            .into_iter()
            .map(|days| CardBox::new(days, now))
            .collect();

        Self { boxes }
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn boxes(&self) -> &[CardBox] {
        &self.boxes
    }

    /// Places a card in the first box. Duplicate ids are not rejected;
    /// lookups resolve to the first match in box order.
    pub fn add_card(&mut self, card: Card) {
        self.boxes[0].cards.push(card);
    }

    /// Records a review outcome for the card with the given id.
    ///
    /// A correct answer advances the card one box, staying put once it
    /// reaches the last box; an incorrect answer sends it back to the
    /// first box from anywhere. The card and its destination box are both
    /// stamped with `now`. Returns the card's new state, or `None` when no
    /// box holds the id (the call is then a no-op).
    pub fn update_card(&mut self, id: Uuid, correct: bool, now: SystemTime) -> Option<Card> {
        let (box_index, card_index) = self.locate(id)?;

        let mut card = self.boxes[box_index].cards.remove(card_index);
        card.last_reviewed = now;

        let target = if correct {
            (box_index + 1).min(self.boxes.len() - 1)
        } else {
            0
        };

        let target_box = &mut self.boxes[target];
        target_box.cards.push(card.clone());
        target_box.last_reviewed = now;

        Some(card)
    }

    /// Cards due for review, capped at [`DEFAULT_REVIEW_LIMIT`].
    pub fn due_for_review(&self, now: SystemTime) -> Vec<Card> {
        self.due_for_review_limit(DEFAULT_REVIEW_LIMIT, now)
    }

    /// Cards from every box whose due date has passed or is today.
    ///
    /// The check is box-granular: a due box contributes all of its cards.
    /// Results come in box order, then insertion order, truncated to
    /// `limit`. Empty when nothing is due.
    pub fn due_for_review_limit(&self, limit: usize, now: SystemTime) -> Vec<Card> {
        let today = day_of(now);
        let mut due = Vec::new();

        for card_box in &self.boxes {
            if !card_box.due_on(today) {
                continue;
            }
            for card in &card_box.cards {
                if due.len() == limit {
                    return due;
                }
                due.push(card.clone());
            }
        }

        due
    }

    /// Replaces the whole box collection with a restored snapshot.
    /// No topology validation; the caller supplies a coherent set.
    pub fn load_boxes(&mut self, boxes: Vec<CardBox>) {
        self.boxes = boxes;
    }

    fn locate(&self, id: Uuid) -> Option<(usize, usize)> {
        for (box_index, card_box) in self.boxes.iter().enumerate() {
            if let Some(card_index) = card_box.cards.iter().position(|card| card.id == id) {
                return Some((box_index, card_index));
            }
        }
        None
    }
}
