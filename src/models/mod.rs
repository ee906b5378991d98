pub mod card;
pub mod card_box;
pub mod intervals;
pub mod leitner;

pub use card::Card;
pub use card_box::CardBox;
pub use leitner::LeitnerSystem;
