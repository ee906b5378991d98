//! CardBox is an ordered bucket of cards at one review-interval level.
use super::Card;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One Leitner box: the cards it holds, how many days it waits between
/// reviews, and when it was last touched.
///
/// `review_interval` is fixed when the system is constructed and never
/// changes afterward. Card order is insertion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardBox {
    pub cards: Vec<Card>,
    pub review_interval: u32,
    pub last_reviewed: SystemTime,
}

impl CardBox {
    /// Creates an empty box with the given interval, stamped with `now`.
    pub fn new(review_interval: u32, now: SystemTime) -> Self {
        Self {
            cards: Vec::new(),
            review_interval,
            last_reviewed: now,
        }
    }

    /// Day this box becomes due: last touch truncated to a calendar day,
    /// plus the review interval.
    pub fn due_date(&self) -> NaiveDate {
        day_of(self.last_reviewed) + Days::new(self.review_interval as u64)
    }

    /// True when the box's due date has passed or is `today`.
    pub fn due_on(&self, today: NaiveDate) -> bool {
        self.due_date() <= today
    }
}

/// Truncates a timestamp to calendar-day granularity (UTC); time of day
/// is discarded for all due comparisons.
pub fn day_of(time: SystemTime) -> NaiveDate {
    let datetime: DateTime<Utc> = time.into();
    datetime.date_naive()
}
