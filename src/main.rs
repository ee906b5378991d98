use leitner_app::*;

use database::db::{get_current_date, init_database, load_boxes, save_boxes};

fn main() {
    let mut conn = init_database().expect("Failed to initialize database");
    let now = get_current_date(&conn).expect("Failed to read current date");

    let saved = load_boxes(&conn).expect("Failed to load box state");

    let mut system = LeitnerSystem::new(5, now);
    if saved.is_empty() {
        system.add_card(Card::new("cześć".to_string(), now));
        system.add_card(Card::new("dziękuję".to_string(), now));
        system.add_card(Card::new("proszę".to_string(), now));

        save_boxes(system.boxes(), &mut conn).expect("Failed to save box state");
        println!("Sample data created!");
    } else {
        system.load_boxes(saved);
    }

    println!("Loaded {} boxes from database", system.box_count());
    for (index, card_box) in system.boxes().iter().enumerate() {
        println!(
            "  - box {} ({} cards, every {} days)",
            index,
            card_box.cards.len(),
            card_box.review_interval
        );
    }

    let due = system.due_for_review(now);
    if due.is_empty() {
        println!("No cards due today.");
    } else {
        println!("{} cards due today:", due.len());
        for card in &due {
            println!("  - {}", card.word);
        }
    }
}
