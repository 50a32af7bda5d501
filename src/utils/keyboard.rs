use std::collections::HashMap;

use super::tile::LetterStatus;

/// Best-known status per letter across the whole round, used to color the
/// virtual keyboard.
#[derive(Debug)]
pub struct KeyboardStatus {
    keys: HashMap<char, LetterStatus>,
}

impl KeyboardStatus {
    pub fn new() -> Self {
        let mut keys = HashMap::new();
        for ch in 'A'..='Z' {
            keys.entry(ch).or_insert(LetterStatus::Unset);
        }
        KeyboardStatus { keys }
    }

    /// Merge one evaluated cell into the map. Statuses have priorities;
    /// the higher the priority, the smaller the value, so a fold only
    /// takes effect when it strictly upgrades the letter.
    pub fn fold(&mut self, letter: char, status: LetterStatus) {
        let entry = self
            .keys
            .entry(letter.to_ascii_uppercase())
            .or_insert(LetterStatus::Unset);
        if status < *entry {
            *entry = status;
        }
    }

    pub fn get(&self, letter: char) -> LetterStatus {
        self.keys
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(LetterStatus::Unset)
    }

    pub fn reset(&mut self) {
        for (_, status) in self.keys.iter_mut() {
            *status = LetterStatus::Unset;
        }
    }
}

impl Default for KeyboardStatus {
    fn default() -> Self {
        Self::new()
    }
}
