//! JSON import/export module for box-state snapshots.
//! Provides functionality to save and load the full box collection to/from JSON files.

use crate::models::CardBox;
use std::fs::File;
use std::io::{Read, Write};

/// Exports the box collection to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_boxes_to_path(boxes: &[CardBox], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(boxes)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a box collection from a JSON file.
/// Prints a summary line upon successful import.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_boxes(filename: &str) -> Result<Vec<CardBox>, Box<dyn std::error::Error>> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    // Deserialize JSON string into the box collection
    let boxes: Vec<CardBox> = serde_json::from_str(&contents)?;

    println!("{} boxes imported from '{}'", boxes.len(), filename);
    Ok(boxes)
}
